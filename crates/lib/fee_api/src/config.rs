//! API server configuration.

use std::path::PathBuf;

use fee_core::completion::DEFAULT_MAX_TOKENS;

/// Default frontend origin allowed by CORS.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Default largest accepted upload body (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:5001").
    pub bind_addr: String,
    /// Origin allowed by CORS; `*` allows any origin.
    pub cors_origin: String,
    /// Directory where uploads are staged while being extracted.
    pub upload_dir: PathBuf,
    /// Largest accepted `/upload` request body, in bytes.
    pub max_upload_bytes: usize,
    /// Reply ceiling passed to the completion service.
    pub max_tokens: u32,
}

impl Default for ApiConfig {
    /// | Field              | Default                 |
    /// |--------------------|-------------------------|
    /// | `bind_addr`        | `0.0.0.0:5001`          |
    /// | `cors_origin`      | `http://localhost:3000` |
    /// | `upload_dir`       | `uploads`               |
    /// | `max_upload_bytes` | 10 MiB                  |
    /// | `max_tokens`       | 100                     |
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5001".into(),
            cors_origin: DEFAULT_CORS_ORIGIN.into(),
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
