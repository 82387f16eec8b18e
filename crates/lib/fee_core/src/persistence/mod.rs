//! Persistence gateway.
//!
//! Handlers depend on the [`Persistence`] trait rather than on a concrete
//! pool, so the PostgreSQL store can be swapped for the in-memory store in
//! tests or local demos.
//!
//! Every operation is a single atomic statement: inserts are append-only
//! and the list operations return all rows newest first, with the id as a
//! tie-breaker for equal timestamps.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ConversationTurn, FormSubmission, NewFormSubmission, Upload};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by the datastore.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),

    #[error("Datastore unavailable")]
    Unavailable,
}

/// Append-only storage for conversation turns, uploads and form submissions.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Store one chat turn with a datastore-assigned timestamp.
    async fn insert_conversation(
        &self,
        user_message: &str,
        fee_response: &str,
    ) -> Result<ConversationTurn, StorageError>;

    /// All conversation turns, most recent first.
    async fn list_conversations(&self) -> Result<Vec<ConversationTurn>, StorageError>;

    /// Store an uploaded document's name and extracted text.
    async fn insert_upload(
        &self,
        file_name: &str,
        file_content: &str,
    ) -> Result<Upload, StorageError>;

    /// All uploads, most recent first.
    async fn list_uploads(&self) -> Result<Vec<Upload>, StorageError>;

    /// Store a contact-form submission.
    async fn insert_form_submission(
        &self,
        submission: &NewFormSubmission,
    ) -> Result<FormSubmission, StorageError>;

    /// All form submissions, most recent first.
    async fn list_form_submissions(&self) -> Result<Vec<FormSubmission>, StorageError>;

    /// Whether the datastore currently answers queries.
    async fn ping(&self) -> bool;
}
