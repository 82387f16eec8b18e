//! Document text extraction.

pub mod pdf;

use async_trait::async_trait;
use thiserror::Error;

pub use pdf::PdfExtractor;

/// Errors raised while extracting text from a document.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Document is empty")]
    Empty,

    #[error("PDF parse error: {0}")]
    Parse(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Turns a document's raw bytes into plain text.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract the text of `bytes`. An empty string is a valid result for
    /// documents with no text layer.
    async fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}
