// REST API endpoints

use axum::{
    extract::{Query, State},
    response::{Json, Redirect},
    routing::get,
    Router,
};
use std::sync::Arc;

use super::{websocket, TableQuery};
use crate::error::{AppError, AppResult};
use crate::routes::sort::{SortDirection, SortDirective, SortField};
use crate::routes::table::RouteTable;
use crate::routes::view::TableView;
use crate::routes::Route;

/// Shared, read-only application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub routes: Arc<Vec<Route>>,
}

impl AppState {
    pub fn new(routes: Vec<Route>) -> Self {
        AppState {
            routes: Arc::new(routes),
        }
    }

    /// Fresh, unsorted table over the seed routes
    pub fn new_table(&self) -> RouteTable {
        RouteTable::new(self.routes.clone())
    }
}

pub fn create_api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/api/routes", get(get_routes))
        .route("/ws", get(websocket::websocket_handler))
        .with_state(state)
}

async fn get_routes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> AppResult<Json<TableView>> {
    let directive = directive_from_query(&query)?;
    let table = RouteTable::with_directive(state.routes.clone(), directive);
    Ok(Json(TableView::render(&table)))
}

/// An unknown field falls back to natural order; a bad direction is rejected.
fn directive_from_query(query: &TableQuery) -> AppResult<SortDirective> {
    let direction = match query.direction.as_deref() {
        Some(direction) => direction.parse::<SortDirection>().map_err(AppError::InvalidQuery)?,
        None => SortDirection::default(),
    };

    let field = match query.field.as_deref() {
        Some(field) => match field.parse::<SortField>() {
            Ok(field) => Some(field),
            Err(e) => {
                tracing::warn!("{}, returning unsorted table", e);
                None
            }
        },
        None => None,
    };

    Ok(SortDirective { field, direction })
}
