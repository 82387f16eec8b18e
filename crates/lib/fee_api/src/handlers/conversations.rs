//! Conversation history handler.

use axum::Json;
use axum::extract::State;
use fee_core::models::ConversationTurn;

use crate::AppState;
use crate::error::AppResult;

/// `GET /conversations`: every stored chat turn, newest first.
pub async fn list_conversations_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ConversationTurn>>> {
    let rows = state.store.list_conversations().await?;
    Ok(Json(rows))
}
