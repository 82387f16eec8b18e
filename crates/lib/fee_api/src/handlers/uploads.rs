//! Upload request handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::multipart::{Multipart, MultipartRejection};
use fee_core::models::Upload;
use tracing::debug;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::UploadResponse;
use crate::services::uploads::{self, FILE_FIELD, NO_FILE, UPLOAD_SUCCESS};

/// `POST /upload`: extract the text of the `file` field and store it.
pub async fn upload_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadResponse>> {
    let mut multipart = multipart.map_err(|e| {
        debug!("not a multipart request: {}", e.body_text());
        AppError::Validation(NO_FILE.into())
    })?;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {}", e.body_text())))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|n| !n.trim().is_empty())
            .map(str::to_owned)
            .ok_or_else(|| AppError::Validation(NO_FILE.into()))?;

        let bytes = uploads::stage_field(&state.config.upload_dir, &mut field).await?;
        let content = uploads::extract_and_store(&state, &file_name, &bytes).await?;

        return Ok(Json(UploadResponse {
            message: UPLOAD_SUCCESS.to_string(),
            content,
        }));
    }

    Err(AppError::Validation(NO_FILE.into()))
}

/// `GET /uploads`: every stored upload, newest first.
pub async fn list_uploads_handler(State(state): State<AppState>) -> AppResult<Json<Vec<Upload>>> {
    let rows = state.store.list_uploads().await?;
    Ok(Json(rows))
}
