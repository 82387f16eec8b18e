//! Contact-form handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use fee_core::models::FormSubmission;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{FormRequest, FormResponse};
use crate::services::forms::{self, FORM_SUCCESS};

/// `POST /submit-form`: store a contact-form submission.
pub async fn submit_form_handler(
    State(state): State<AppState>,
    payload: Result<Json<FormRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<FormResponse>)> {
    let Json(body) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let submission = forms::validate_form(&body)?;

    let data = forms::submit_form(&state, &submission).await?;
    Ok((
        StatusCode::CREATED,
        Json(FormResponse {
            message: FORM_SUCCESS.to_string(),
            data,
        }),
    ))
}

/// `GET /form-submissions`: every stored submission, newest first.
pub async fn list_form_submissions_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FormSubmission>>> {
    let rows = state.store.list_form_submissions().await?;
    Ok(Json(rows))
}
