//! PDF text extraction via `pdf-extract`.
//!
//! Parsing is CPU-bound and may panic on hostile input, so it runs on the
//! blocking pool; a panic surfaces as [`ExtractionError::Task`].

use async_trait::async_trait;

use super::{ExtractionError, Extractor};

/// PDF extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::Empty);
        }

        let owned = bytes.to_vec();
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&owned))
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))?
            .map_err(|e| ExtractionError::Parse(e.to_string()))
    }
}
