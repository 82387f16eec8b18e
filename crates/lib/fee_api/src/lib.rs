//! # fee_api
//!
//! HTTP API library for the Fee chat backend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use fee_core::completion::Completer;
use fee_core::extraction::Extractor;
use fee_core::persistence::Persistence;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ApiConfig;
use crate::handlers::{chat, conversations, forms, hello, uploads};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Datastore for conversations, uploads and form submissions.
    pub store: Arc<dyn Persistence>,
    /// Language-model completion service.
    pub completer: Arc<dyn Completer>,
    /// Document text extractor.
    pub extractor: Arc<dyn Extractor>,
    /// API configuration.
    pub config: ApiConfig,
}

/// CORS policy for the configured frontend origin.
fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origin.trim() == "*" {
        return cors.allow_origin(Any);
    }
    match HeaderValue::from_str(origin.trim()) {
        Ok(value) => cors.allow_origin(AllowOrigin::exact(value)),
        Err(e) => {
            warn!(origin, "invalid CORS origin, cross-origin requests disabled: {e}");
            cors
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origin);
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route(routes::GET_ROOT, get(hello::hello_handler))
        .route(
            routes::POST_UPLOAD,
            post(uploads::upload_handler).layer(upload_limit),
        )
        .route(routes::POST_CHAT, post(chat::chat_handler))
        .route(
            routes::GET_CONVERSATIONS,
            get(conversations::list_conversations_handler),
        )
        .route(routes::GET_UPLOADS, get(uploads::list_uploads_handler))
        .route(routes::POST_SUBMIT_FORM, post(forms::submit_form_handler))
        .route(
            routes::GET_FORM_SUBMISSIONS,
            get(forms::list_form_submissions_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

