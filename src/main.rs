mod api;
mod config;
mod error;
mod routes;

use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use api::rest::AppState;
use config::Config;
use error::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.as_str().to_lowercase()))
        .init();
    tracing::info!("Route Table Viewer starting...");
    tracing::info!("Loaded {} route(s)", config.routes.len());

    let state = Arc::new(AppState::new(config.routes));
    let addr = config.addr;

    // Build application router
    let app = api::rest::create_api_router(state)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .into_make_service();

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET  http://{}/api/routes?field=&direction=", addr);
    tracing::info!("  WS   ws://{}/ws", addr);
    tracing::info!("Web UI: http://{}/static/index.html", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}
