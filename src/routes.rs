//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                 - Dashboard shell page (public)
//! - `GET  /api/ping`         - Status (public)
//! - `POST /api/auth/login`   - Login (public)
//! - `POST /api/assistant`    - Assistant (Bearer token required)
//! - `/static/*`              - Static assets, when the directory exists
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive; the dashboard may be hosted on another origin
//! - **Authentication** - Bearer token on protected API routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes and middleware, without path normalization.
///
/// `static_dir` is mounted under `/static` only if it is an existing directory.
pub fn router(state: AppState, static_dir: &str) -> Router {
    let api_router = api::routes::public_routes().merge(api::routes::protected_routes(state.clone()));

    let mut router = Router::new()
        .merge(web::routes::public_routes())
        .nest("/api", api_router);

    if Path::new(static_dir).is_dir() {
        router = router.nest_service("/static", ServeDir::new(static_dir));
    } else {
        ::tracing::debug!(static_dir, "Static directory not found, /static not mounted");
    }

    router
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
