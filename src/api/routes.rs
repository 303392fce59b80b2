//! API route configuration.

use crate::api::handlers::{assistant_handler, login_handler, ping_handler};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET  /ping`        - Status and server time
/// - `POST /auth/login`  - Exchange credentials for a bearer token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/auth/login", post(login_handler))
}

/// API routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /assistant`   - Forward a prompt to the assistant
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/assistant", post(assistant_handler))
        .route_layer(middleware::from_fn_with_state(state, auth::layer))
}
