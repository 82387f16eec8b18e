//! Request and response bodies of the HTTP API.
//!
//! Request fields are optional at the serde level so that a missing field
//! reaches the handler and is reported as a validation error (400) rather
//! than an extractor rejection.

use fee_core::models::FormSubmission;
use serde::{Deserialize, Serialize};

/// `POST /chat` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    /// Extracted text of a previously uploaded document, held by the client.
    #[serde(default, rename = "pdfContent")]
    pub pdf_content: Option<String>,
}

/// `POST /chat` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// `POST /upload` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub content: String,
}

/// `POST /submit-form` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /submit-form` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormResponse {
    pub message: String,
    pub data: FormSubmission,
}

/// `GET /` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloResponse {
    pub greeting: String,
    pub version: String,
    pub db_connected: bool,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
