//! Persisted records.
//!
//! Field names are serialized in snake_case, matching the column names the
//! browser client reads (`user_message`, `fee_response`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed chat turn: the user's message and Fee's reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ConversationTurn {
    pub id: Uuid,
    pub user_message: String,
    pub fee_response: String,
    pub timestamp: DateTime<Utc>,
}

/// An uploaded document and the text extracted from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Upload {
    pub id: Uuid,
    pub file_name: String,
    /// May be empty when the document has no extractable text.
    pub file_content: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FormSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

/// Validated input for a new form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}
