//! Shared fixtures for the router integration tests: fake completion and
//! extraction services over the in-memory store.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use fee_api::{AppState, config::ApiConfig};
use fee_core::completion::{Completer, CompletionError};
use fee_core::extraction::{ExtractionError, Extractor};
use fee_core::persistence::MemoryStore;
use tower::ServiceExt;

/// One recorded call to the completer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
}

/// Completer returning a canned reply (or failing) and recording every call.
pub struct FakeCompleter {
    reply: Option<String>,
    calls: Mutex<Vec<CompletionCall>>,
}

impl FakeCompleter {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Completer for FakeCompleter {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(CompletionCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            max_tokens,
        });
        self.reply
            .clone()
            .ok_or_else(|| CompletionError::Api {
                status: 503,
                body: "upstream unavailable".into(),
            })
    }
}

/// Extractor returning fixed text (or failing) and recording the bytes it saw.
pub struct FakeExtractor {
    text: Option<String>,
    seen: Mutex<Vec<Vec<u8>>>,
}

impl FakeExtractor {
    pub fn returning(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: Some(text.to_string()),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            text: None,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn seen(&self) -> Vec<Vec<u8>> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Extractor for FakeExtractor {
    async fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        self.seen.lock().unwrap().push(bytes.to_vec());
        self.text
            .clone()
            .ok_or_else(|| ExtractionError::Parse("malformed xref table".into()))
    }
}

/// Everything a test needs to drive the router and inspect side effects.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub completer: Arc<FakeCompleter>,
    pub extractor: Arc<FakeExtractor>,
    pub upload_dir: tempfile::TempDir,
    pub router: Router,
}

impl TestApp {
    pub fn new(completer: Arc<FakeCompleter>, extractor: Arc<FakeExtractor>) -> Self {
        Self::with_config(completer, extractor, ApiConfig::default())
    }

    pub fn with_config(
        completer: Arc<FakeCompleter>,
        extractor: Arc<FakeExtractor>,
        config: ApiConfig,
    ) -> Self {
        let store = Arc::new(MemoryStore::new());
        let upload_dir = tempfile::tempdir().expect("tempdir");
        let state = AppState {
            store: store.clone(),
            completer: completer.clone(),
            extractor: extractor.clone(),
            config: ApiConfig {
                upload_dir: upload_dir.path().join("staging"),
                ..config
            },
        };
        Self {
            store,
            completer,
            extractor,
            upload_dir,
            router: fee_api::router(state),
        }
    }

    pub fn default_app() -> Self {
        Self::new(
            FakeCompleter::replying("SESMag is..."),
            FakeExtractor::returning("extracted text"),
        )
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.upload_dir.path().join("staging")
    }

    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.expect("request")
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub const BOUNDARY: &str = "----fee-test-boundary";

/// A multipart body with one part per `(field name, file name, bytes)`.
pub fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, bytes) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match file_name {
            Some(f) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{f}\"\r\nContent-Type: application/pdf\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn post_multipart(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn json_body(resp: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

/// Assert status and the shared error-body shape; returns the body.
pub async fn expect_error(resp: Response<Body>, status: StatusCode, kind: &str) -> serde_json::Value {
    assert_eq!(resp.status(), status);
    let json = json_body(resp).await;
    assert_eq!(json["error"], kind, "unexpected error body: {json}");
    assert!(json["message"].is_string(), "missing message: {json}");
    json
}
