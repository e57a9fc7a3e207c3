use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::post,
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{ IntoResponse, Response },
    Json,
};
use tower_http::cors::{ Any, CorsLayer };
use tower_http::services::ServeDir;
use log::error;

use crate::models::chat::{ ChatMessage, ChatResponse, ErrorResponse };
use crate::relay::{ ChatRelay, RelayError };

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

/// API router plus the static frontend as the fallback service. CORS is
/// wide open: the frontend may be hosted from any origin.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}

/// The body is taken raw so that the contract's statuses hold: only a
/// missing `messages` field is a 400; unreadable JSON and malformed message
/// items fall through as 500s.
async fn chat_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, RelayError> {
    let payload: serde_json::Value = serde_json
        ::from_slice(&body)
        .map_err(|e| RelayError::Server(e.to_string()))?;

    let messages = payload
        .get("messages")
        .ok_or_else(|| {
            RelayError::Validation("Invalid request: 'messages' field is missing.".to_string())
        })?;

    let messages: Vec<ChatMessage> = serde_json
        ::from_value(messages.clone())
        .map_err(|e| RelayError::Server(e.to_string()))?;

    let text = state.relay.respond(&messages).await?;
    Ok(Json(ChatResponse { response: text }))
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) | RelayError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("{}", self);
        }
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
