//! Upload-and-extract service.

use std::path::Path;

use axum::extract::multipart::Field;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Validation message when the request carries no `file` field.
pub const NO_FILE: &str = "No file uploaded.";

/// Success message for `POST /upload`.
pub const UPLOAD_SUCCESS: &str = "File uploaded successfully!";

/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

fn staging_error(e: std::io::Error) -> AppError {
    AppError::Internal(format!("Upload staging failed: {e}"))
}

/// Stream a multipart field into a staging file under `dir` and read the
/// staged bytes back. The staging file is removed before returning.
pub async fn stage_field(dir: &Path, field: &mut Field<'_>) -> AppResult<Vec<u8>> {
    tokio::fs::create_dir_all(dir).await.map_err(staging_error)?;

    let staged = tempfile::Builder::new()
        .prefix("upload-")
        .tempfile_in(dir)
        .map_err(staging_error)?;
    let mut file = tokio::fs::File::from_std(staged.as_file().try_clone().map_err(staging_error)?);

    let mut size = 0usize;
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {}", e.body_text())))?
    {
        size += chunk.len();
        file.write_all(&chunk).await.map_err(staging_error)?;
    }
    file.flush().await.map_err(staging_error)?;
    drop(file);

    let bytes = tokio::fs::read(staged.path()).await.map_err(staging_error)?;
    debug!(size, path = %staged.path().display(), "upload staged");
    Ok(bytes)
}

/// Extract the document's text and store it under `file_name`.
///
/// Nothing is stored when extraction fails.
pub async fn extract_and_store(
    state: &AppState,
    file_name: &str,
    bytes: &[u8],
) -> AppResult<String> {
    let text = state.extractor.extract_text(bytes).await?;
    info!(file_name, text_chars = text.chars().count(), "text extracted");

    let upload = state.store.insert_upload(file_name, &text).await?;
    info!(id = %upload.id, file_name, "upload saved");

    Ok(text)
}
