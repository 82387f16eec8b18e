//! In-memory persistence for tests and database-less local runs.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Persistence, StorageError};
use crate::models::{ConversationTurn, FormSubmission, NewFormSubmission, Upload};
use crate::uuid::uuidv7;

/// Records that carry an insertion timestamp and a time-sortable id.
trait Stamped {
    fn stamp(&self) -> (DateTime<Utc>, Uuid);
}

impl Stamped for ConversationTurn {
    fn stamp(&self) -> (DateTime<Utc>, Uuid) {
        (self.timestamp, self.id)
    }
}

impl Stamped for Upload {
    fn stamp(&self) -> (DateTime<Utc>, Uuid) {
        (self.uploaded_at, self.id)
    }
}

impl Stamped for FormSubmission {
    fn stamp(&self) -> (DateTime<Utc>, Uuid) {
        (self.submitted_at, self.id)
    }
}

/// Copy of `rows` ordered by timestamp descending, then id descending.
fn newest_first<T: Stamped + Clone>(rows: &[T]) -> Vec<T> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| b.stamp().cmp(&a.stamp()));
    sorted
}

/// Vector-backed store. Can be switched offline to simulate an
/// unreachable datastore.
#[derive(Debug, Default)]
pub struct MemoryStore {
    conversations: RwLock<Vec<ConversationTurn>>,
    uploads: RwLock<Vec<Upload>>,
    forms: RwLock<Vec<FormSubmission>>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When offline, every operation fails with [`StorageError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StorageError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Persistence for MemoryStore {
    async fn insert_conversation(
        &self,
        user_message: &str,
        fee_response: &str,
    ) -> Result<ConversationTurn, StorageError> {
        self.check_online()?;
        let row = ConversationTurn {
            id: uuidv7(),
            user_message: user_message.to_string(),
            fee_response: fee_response.to_string(),
            timestamp: Utc::now(),
        };
        self.conversations.write().await.push(row.clone());
        Ok(row)
    }

    async fn list_conversations(&self) -> Result<Vec<ConversationTurn>, StorageError> {
        self.check_online()?;
        let rows = self.conversations.read().await;
        Ok(newest_first(rows.as_slice()))
    }

    async fn insert_upload(
        &self,
        file_name: &str,
        file_content: &str,
    ) -> Result<Upload, StorageError> {
        self.check_online()?;
        let row = Upload {
            id: uuidv7(),
            file_name: file_name.to_string(),
            file_content: file_content.to_string(),
            uploaded_at: Utc::now(),
        };
        self.uploads.write().await.push(row.clone());
        Ok(row)
    }

    async fn list_uploads(&self) -> Result<Vec<Upload>, StorageError> {
        self.check_online()?;
        let rows = self.uploads.read().await;
        Ok(newest_first(rows.as_slice()))
    }

    async fn insert_form_submission(
        &self,
        submission: &NewFormSubmission,
    ) -> Result<FormSubmission, StorageError> {
        self.check_online()?;
        let row = FormSubmission {
            id: uuidv7(),
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            submitted_at: Utc::now(),
        };
        self.forms.write().await.push(row.clone());
        Ok(row)
    }

    async fn list_form_submissions(&self) -> Result<Vec<FormSubmission>, StorageError> {
        self.check_online()?;
        let rows = self.forms.read().await;
        Ok(newest_first(rows.as_slice()))
    }

    async fn ping(&self) -> bool {
        self.check_online().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[tokio::test]
    async fn conversations_are_listed_newest_first() {
        let store = MemoryStore::new();
        store.insert_conversation("first", "one").await.unwrap();
        store.insert_conversation("second", "two").await.unwrap();
        store.insert_conversation("third", "three").await.unwrap();

        let rows = store.list_conversations().await.unwrap();
        let messages: Vec<&str> = rows.iter().map(|r| r.user_message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn equal_timestamps_are_ordered_by_id() {
        let store = MemoryStore::new();
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let older = uuidv7();
        let newer = uuidv7();
        {
            let mut rows = store.conversations.write().await;
            for (id, msg) in [(older, "older"), (newer, "newer")] {
                rows.push(ConversationTurn {
                    id,
                    user_message: msg.into(),
                    fee_response: "reply".into(),
                    timestamp: at,
                });
            }
        }

        let rows = store.list_conversations().await.unwrap();
        assert_eq!(rows[0].id, newer);
        assert_eq!(rows[1].id, older);
    }

    #[tokio::test]
    async fn upload_keeps_empty_content() {
        let store = MemoryStore::new();
        let row = store.insert_upload("scan.pdf", "").await.unwrap();
        assert_eq!(row.file_name, "scan.pdf");
        assert_eq!(row.file_content, "");
        assert_eq!(store.list_uploads().await.unwrap(), vec![row]);
    }

    #[tokio::test]
    async fn form_submission_round_trips_fields() {
        let store = MemoryStore::new();
        let row = store
            .insert_form_submission(&NewFormSubmission {
                name: "A".into(),
                email: "a@b.com".into(),
                message: "hi".into(),
            })
            .await
            .unwrap();
        assert_eq!(row.name, "A");
        assert_eq!(row.email, "a@b.com");
        assert_eq!(row.message, "hi");
        assert_eq!(store.list_form_submissions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn offline_store_rejects_everything() {
        let store = MemoryStore::new();
        store.set_offline(true);
        assert!(!store.ping().await);
        assert!(matches!(
            store.insert_conversation("a", "b").await,
            Err(StorageError::Unavailable)
        ));
        assert!(matches!(
            store.list_uploads().await,
            Err(StorageError::Unavailable)
        ));

        store.set_offline(false);
        assert!(store.ping().await);
        assert!(store.list_conversations().await.unwrap().is_empty());
    }
}
