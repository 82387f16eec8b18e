//! Route paths.

pub const GET_ROOT: &str = "/";
pub const POST_UPLOAD: &str = "/upload";
pub const POST_CHAT: &str = "/chat";
pub const GET_CONVERSATIONS: &str = "/conversations";
pub const GET_UPLOADS: &str = "/uploads";
pub const POST_SUBMIT_FORM: &str = "/submit-form";
pub const GET_FORM_SUBMISSIONS: &str = "/form-submissions";
