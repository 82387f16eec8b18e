//! Chat-turn service.

use fee_core::prompt::{FEE_PERSONA, compose_user_prompt};
use tracing::{debug, info};

use super::non_empty;
use crate::AppState;
use crate::error::{AppError, AppResult};

/// Validation message for a missing or empty chat message.
pub const EMPTY_MESSAGE: &str = "Message cannot be empty.";

/// Require a non-empty chat message.
pub fn validate_message(message: Option<&str>) -> AppResult<&str> {
    non_empty(message).ok_or_else(|| AppError::Validation(EMPTY_MESSAGE.into()))
}

/// Run one chat turn: compose the prompt, ask the completer, store the
/// turn, return the reply.
///
/// Nothing is stored when the completion fails.
pub async fn chat_turn(
    state: &AppState,
    message: &str,
    pdf_content: Option<&str>,
) -> AppResult<String> {
    let prompt = compose_user_prompt(message, pdf_content);
    debug!(%prompt, "full prompt for completion");

    let reply = state
        .completer
        .complete(FEE_PERSONA, &prompt, state.config.max_tokens)
        .await?;
    info!(reply_chars = reply.chars().count(), "completion received");

    let turn = state.store.insert_conversation(message, &reply).await?;
    info!(id = %turn.id, "conversation saved");

    Ok(reply)
}
