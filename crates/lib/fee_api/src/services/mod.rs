//! Request orchestration shared by the handlers: validation, calls to the
//! external capabilities, and persistence, in that order.

pub mod chat;
pub mod forms;
pub mod uploads;

/// `Some` only when the value is present and not the empty string.
/// Whitespace counts as content.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
