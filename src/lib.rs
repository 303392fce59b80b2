//! # Command Center
//!
//! A small operations dashboard: a token-authenticated client and the Axum
//! backend it talks to.
//!
//! ## Architecture
//!
//! The backend follows Clean Architecture with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Users, token claims and repository traits
//! - **Application Layer** ([`application`]) - Authentication and assistant services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory user directory and chat backends
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML shell page for the browser dashboard
//!
//! The [`client`] module is the dashboard itself: session store, view model,
//! request layer and the login/logout/status/assistant flows. The `dashboard`
//! binary drives it from a terminal.
//!
//! ## Quick Start
//!
//! ```bash
//! # Required for the backend
//! export TOKEN_SIGNING_SECRET="a-long-random-string-of-32-bytes-or-more"
//! export OPENAI_API_KEY="sk-..."  # Optional
//!
//! # Start the backend
//! cargo run
//!
//! # In another terminal
//! cargo run --bin dashboard -- login --email admin@example.com
//! cargo run --bin dashboard -- ask "what needs attention today?"
//! ```
//!
//! ## Configuration
//!
//! Backend configuration is loaded from environment variables via [`config::Config`],
//! client configuration via [`client::ClientConfig`].

pub mod api;
pub mod application;
pub mod client;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod telemetry;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AssistantService, AuthService};
    pub use crate::client::{ApiClient, ClientError, Dashboard, DashboardView, ViewState};
    pub use crate::domain::entities::{NewUser, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
