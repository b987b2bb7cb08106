// API module - REST endpoints and WebSocket handling

pub mod rest;
pub mod websocket;

use serde::{Deserialize, Serialize};

/// Query for a one-off sorted table
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TableQuery {
    pub field: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
