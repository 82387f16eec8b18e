//! Root greeting: bootstrap health check.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HelloResponse;

/// `GET /`: greeting, crate version and datastore connectivity.
pub async fn hello_handler(State(state): State<AppState>) -> Json<HelloResponse> {
    let db_connected = state.store.ping().await;

    Json(HelloResponse {
        greeting: fee_core::hello::hello_world().to_string(),
        version: fee_core::version().to_string(),
        db_connected,
    })
}
