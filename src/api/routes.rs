//! Router configuration for the API.

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tower_http::timeout::TimeoutLayer;

use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::config::ServerConfig;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID, so every later log line can carry it
/// 2. Logging
/// 3. Timeout, answering 408 after `server.request_timeout` seconds
///
/// # Routes
/// - `/api/v1` - Person create/read operations
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api/v1", handlers::persons::person_routes())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout),
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
