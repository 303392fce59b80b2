//! HTTP request handlers for API endpoints.

pub mod assistant;
pub mod auth;
pub mod ping;

pub use assistant::assistant_handler;
pub use auth::login_handler;
pub use ping::ping_handler;
