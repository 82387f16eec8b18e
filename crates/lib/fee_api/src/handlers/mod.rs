//! Request handlers.

pub mod chat;
pub mod conversations;
pub mod forms;
pub mod hello;
pub mod uploads;
