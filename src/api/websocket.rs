// WebSocket handler: one sortable table session per connection

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{sink::SinkExt, stream::StreamExt, Sink};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::rest::AppState;
use crate::error::{AppError, AppResult};
use crate::routes::sort::SortField;
use crate::routes::table::RouteTable;
use crate::routes::view::TableView;

// WebSocket message types from client to server
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Column header activated
    #[serde(rename = "sort")]
    Sort { field: String },
    #[serde(rename = "get_table")]
    GetTable,
}

// WebSocket message types from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "table")]
    Table { view: TableView },
    #[serde(rename = "error")]
    Error { error_code: String, message: String },
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // Messages are handled one at a time; the session owns its table outright
    let mut session = TableSession::new(state.new_table());

    if let Err(e) = send(&mut sender, &session.render()).await {
        tracing::warn!("Failed to send initial table: {}", e);
        return;
    }

    while let Some(Ok(msg)) = receiver.next().await {
        let reply = match msg {
            Message::Text(text) => session.handle_text(&text),
            Message::Close(_) => break,
            _ => continue,
        };

        if let Err(e) = send(&mut sender, &reply).await {
            tracing::warn!("WebSocket send failed: {}", e);
            break;
        }
    }

    tracing::debug!("WebSocket session closed");
}

async fn send<S>(sender: &mut S, msg: &ServerMessage) -> AppResult<()>
where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    let json = serde_json::to_string(msg)?;
    sender
        .send(Message::Text(json))
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}

/// Per-connection table state and the message dispatch for it
pub struct TableSession {
    table: RouteTable,
}

impl TableSession {
    pub fn new(table: RouteTable) -> Self {
        TableSession { table }
    }

    pub fn render(&self) -> ServerMessage {
        ServerMessage::Table {
            view: TableView::render(&self.table),
        }
    }

    pub fn handle_text(&mut self, text: &str) -> ServerMessage {
        match serde_json::from_str::<ClientMessage>(text) {
            Ok(msg) => self.handle_message(msg),
            Err(e) => {
                tracing::warn!("Malformed client message: {}", e);
                ServerMessage::Error {
                    error_code: "MalformedMessage".to_string(),
                    message: e.to_string(),
                }
            }
        }
    }

    pub fn handle_message(&mut self, msg: ClientMessage) -> ServerMessage {
        match msg {
            ClientMessage::Sort { field } => match field.parse::<SortField>() {
                Ok(field) => {
                    self.table.toggle_sort(field);
                }
                Err(e) => {
                    tracing::warn!("{}, ignoring sort request", e);
                }
            },
            ClientMessage::GetTable => {}
        }
        self.render()
    }
}
