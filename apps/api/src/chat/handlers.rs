use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::chat::ChatReply;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatHealthResponse {
    pub connected: bool,
}

/// POST /api/v1/chat
pub async fn handle_send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatMessageRequest>,
) -> Result<Json<ChatReply>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("Message must not be empty".to_string()));
    }
    let reply = state
        .chat
        .send_message(&req.message, req.model.as_deref(), None)
        .await
        .map_err(|e| AppError::Chat(e.to_string()))?;
    Ok(Json(reply))
}

/// GET /api/v1/chat/health
pub async fn handle_chat_health(State(state): State<AppState>) -> Json<ChatHealthResponse> {
    Json(ChatHealthResponse {
        connected: state.chat.test_connection().await,
    })
}

/// POST /api/v1/chat/reset
pub async fn handle_reset_conversation(State(state): State<AppState>) -> StatusCode {
    state.chat.reset_conversation();
    StatusCode::NO_CONTENT
}
