//! Chat request handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatRequest, ChatResponse};
use crate::services::chat;

/// `POST /chat`: ask Fee a question, optionally about uploaded document text.
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let message = chat::validate_message(body.message.as_deref())?;

    let reply = chat::chat_turn(&state, message, body.pdf_content.as_deref()).await?;
    Ok(Json(ChatResponse { reply }))
}
