//! # fee_core
//!
//! Core domain logic for the Fee chat backend: records, persistence,
//! prompt composition and the adapters for the completion and PDF
//! extraction services.

pub mod completion;
pub mod db;
pub mod extraction;
pub mod hello;
pub mod migrate;
pub mod models;
pub mod persistence;
pub mod prompt;
pub mod uuid;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
