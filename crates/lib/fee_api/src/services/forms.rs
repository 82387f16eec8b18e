//! Contact-form service.

use fee_core::models::{FormSubmission, NewFormSubmission};
use tracing::info;

use super::non_empty;
use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::FormRequest;

/// Validation message when any form field is missing or empty.
pub const MISSING_FIELDS: &str = "All fields are required.";

/// Success message for `POST /submit-form`.
pub const FORM_SUCCESS: &str = "Form submitted successfully!";

/// Require `name`, `email` and `message`. The email format is not checked.
pub fn validate_form(body: &FormRequest) -> AppResult<NewFormSubmission> {
    match (
        non_empty(body.name.as_deref()),
        non_empty(body.email.as_deref()),
        non_empty(body.message.as_deref()),
    ) {
        (Some(name), Some(email), Some(message)) => Ok(NewFormSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }),
        _ => Err(AppError::Validation(MISSING_FIELDS.into())),
    }
}

/// Store a validated submission and return the stored record.
pub async fn submit_form(
    state: &AppState,
    submission: &NewFormSubmission,
) -> AppResult<FormSubmission> {
    let row = state.store.insert_form_submission(submission).await?;
    info!(id = %row.id, "form submission saved");
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> FormRequest {
        FormRequest {
            name: name.map(Into::into),
            email: email.map(Into::into),
            message: message.map(Into::into),
        }
    }

    #[test]
    fn complete_form_is_accepted_without_email_check() {
        let submission = validate_form(&form(Some("A"), Some("not-an-email"), Some("hi"))).unwrap();
        assert_eq!(submission.name, "A");
        assert_eq!(submission.email, "not-an-email");
        assert_eq!(submission.message, "hi");
    }

    #[test]
    fn any_missing_or_empty_field_is_rejected() {
        let cases = [
            form(None, Some("a@b.com"), Some("hi")),
            form(Some("A"), None, Some("hi")),
            form(Some("A"), Some("a@b.com"), None),
            form(Some("A"), Some(""), Some("hi")),
        ];
        for case in cases {
            assert!(matches!(validate_form(&case), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn whitespace_fields_are_accepted_as_given() {
        let submission = validate_form(&form(Some(" "), Some(" "), Some("  "))).unwrap();
        assert_eq!(submission.name, " ");
        assert_eq!(submission.email, " ");
        assert_eq!(submission.message, "  ");
    }
}
