//! Completion client: the language-model capability behind chat turns.
//!
//! # Public API
//!
//! - [`Completer`]: send a system prompt and a user prompt, get one reply
//! - [`build_messages`]: the two role-tagged messages every request carries
//! - [`openai::OpenAiCompleter`]: adapter for the OpenAI chat-completions API

pub mod openai;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default reply ceiling in tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// Errors that can occur while requesting a completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Completion timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error: {status} {body}")]
    Api { status: u16, body: String },

    #[error("Response parse error: {0}")]
    Parse(String),

    #[error("Completion returned an empty reply")]
    EmptyReply,
}

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The message list for one completion: the system prompt, then the user prompt.
pub fn build_messages(system_prompt: &str, user_prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            role: Role::System,
            content: system_prompt.to_string(),
        },
        ChatMessage {
            role: Role::User,
            content: user_prompt.to_string(),
        },
    ]
}

/// A language-model service producing one reply per request.
#[async_trait]
pub trait Completer: Send + Sync {
    /// Generate a reply of at most `max_tokens` tokens.
    ///
    /// Implementations return the reply trimmed of surrounding whitespace
    /// and fail with [`CompletionError::EmptyReply`] rather than return an
    /// empty string.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError>;
}
