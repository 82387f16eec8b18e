//! PostgreSQL-backed persistence.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{Persistence, StorageError};
use crate::models::{ConversationTurn, FormSubmission, NewFormSubmission, Upload};
use crate::uuid::uuidv7;

/// Persistence over a shared PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool (used for migrations at start-up).
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Persistence for PgStore {
    async fn insert_conversation(
        &self,
        user_message: &str,
        fee_response: &str,
    ) -> Result<ConversationTurn, StorageError> {
        let row = sqlx::query_as::<_, ConversationTurn>(
            r#"
            INSERT INTO conversations (id, user_message, fee_response)
            VALUES ($1, $2, $3)
            RETURNING id, user_message, fee_response, "timestamp"
            "#,
        )
        .bind(uuidv7())
        .bind(user_message)
        .bind(fee_response)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_conversations(&self) -> Result<Vec<ConversationTurn>, StorageError> {
        let rows = sqlx::query_as::<_, ConversationTurn>(
            r#"
            SELECT id, user_message, fee_response, "timestamp"
            FROM conversations
            ORDER BY "timestamp" DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_upload(
        &self,
        file_name: &str,
        file_content: &str,
    ) -> Result<Upload, StorageError> {
        let row = sqlx::query_as::<_, Upload>(
            r#"
            INSERT INTO uploads (id, file_name, file_content)
            VALUES ($1, $2, $3)
            RETURNING id, file_name, file_content, uploaded_at
            "#,
        )
        .bind(uuidv7())
        .bind(file_name)
        .bind(file_content)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_uploads(&self) -> Result<Vec<Upload>, StorageError> {
        let rows = sqlx::query_as::<_, Upload>(
            r#"
            SELECT id, file_name, file_content, uploaded_at
            FROM uploads
            ORDER BY uploaded_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_form_submission(
        &self,
        submission: &NewFormSubmission,
    ) -> Result<FormSubmission, StorageError> {
        let row = sqlx::query_as::<_, FormSubmission>(
            r#"
            INSERT INTO forms (id, name, email, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, message, submitted_at
            "#,
        )
        .bind(uuidv7())
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_form_submissions(&self) -> Result<Vec<FormSubmission>, StorageError> {
        let rows = sqlx::query_as::<_, FormSubmission>(
            r#"
            SELECT id, name, email, message, submitted_at
            FROM forms
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
