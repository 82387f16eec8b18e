//! Prompt composition for the Fee persona.
//!
//! The persona text is sent twice: once as the system message and again at
//! the head of the user message. Clients depend on replies produced from
//! exactly this layout, so the duplication is kept.

/// System persona for chat turns.
pub const FEE_PERSONA: &str = "You are Fee, a helpful persona from SESMag. Use the provided PDF content to assist with your responses.";

/// Shorter persona used by the credential probe.
pub const PROBE_PERSONA: &str = "You are Fee, a helpful persona from SESMag.";

/// Question sent by the credential probe.
pub const PROBE_QUESTION: &str = "Hello Fee! What is SESMag?";

/// Reply ceiling for the credential probe.
pub const PROBE_MAX_TOKENS: u32 = 50;

/// Build the user-turn text for a chat request.
///
/// With document content:
/// `{persona}\n\nPDF Content: {content}\n\nUser's Question: {message}`.
/// Without (absent or empty): `{persona}\n\nUser's Question: {message}`.
pub fn compose_user_prompt(message: &str, pdf_content: Option<&str>) -> String {
    match pdf_content {
        Some(content) if !content.is_empty() => format!(
            "{FEE_PERSONA}\n\nPDF Content: {content}\n\nUser's Question: {message}"
        ),
        _ => format!("{FEE_PERSONA}\n\nUser's Question: {message}"),
    }
}
