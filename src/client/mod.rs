//! Dashboard client.
//!
//! Everything the dashboard front end does, independent of how it is drawn:
//!
//! - [`session`] - Durable bearer-token slot ([`session::SessionStore`])
//! - [`view`] - View switcher and the named UI slots ([`view::DashboardView`])
//! - [`api`] - Typed calls to the backend ([`api::ApiClient`]) and the error taxonomy
//! - [`dashboard`] - Bootstrap and the login/logout/status/assistant flows
//! - [`config`] - Client configuration from environment variables
//!
//! # Flow
//!
//! 1. [`dashboard::Dashboard::bootstrap`] picks the initial view from token presence
//! 2. User actions call `handle_login`, `handle_logout`, `handle_assistant`
//! 3. Each flow performs at most one request and renders the outcome into the view;
//!    failures are rendered inline and never propagate
//!
//! # Example
//!
//! ```rust,ignore
//! let store = Arc::new(MemorySessionStore::new());
//! let api = ApiClient::new(Url::parse("http://127.0.0.1:8000")?, None)?;
//! let mut dashboard = Dashboard::new(api, store, ViewState::new());
//!
//! dashboard.bootstrap().await;
//! dashboard.view_mut().set_email("admin@example.com");
//! dashboard.view_mut().set_password("ChangeMeNow123!");
//! dashboard.handle_login().await;
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod session;
pub mod view;

pub use api::{ApiClient, ClientError, ServerError};
pub use config::ClientConfig;
pub use dashboard::Dashboard;
pub use session::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};
pub use view::{DashboardView, Panel, Tone, View, ViewState};
