// Error types for the route table viewer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::api::ErrorResponse;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Convert error to user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(msg) => {
                format!("Configuration error: {}. Check your config file or command-line arguments.", msg)
            }
            AppError::ConfigParse(_) => {
                "Configuration file is not valid TOML. Check the [server], [logging] and [[routes]] sections.".to_string()
            }
            AppError::Io(_) => {
                "File system error. Check permissions and paths.".to_string()
            }
            AppError::Serialization(_) => {
                "Data format error. This might be a bug, please report it.".to_string()
            }
            AppError::InvalidQuery(msg) => msg.clone(),
            AppError::Server(_) => {
                "Server error. Check that the bind address is free.".to_string()
            }
        }
    }

    /// Machine-readable error code used in API responses
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) | AppError::ConfigParse(_) => "ConfigError",
            AppError::Io(_) => "IoError",
            AppError::Serialization(_) => "SerializationError",
            AppError::InvalidQuery(_) => "InvalidQuery",
            AppError::Server(_) => "ServerError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status().is_server_error() {
            tracing::error!("{}", self);
        }
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.user_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
