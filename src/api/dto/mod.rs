//! Data Transfer Objects for API requests and responses.
//!
//! The same types are used on both ends of the wire: the backend handlers
//! deserialize requests and serialize responses, and [`crate::client::api::ApiClient`]
//! does the reverse. Request DTOs carry `validator` rules enforced by the handlers.

pub mod assistant;
pub mod auth;
pub mod ping;

pub use assistant::{AssistantRequest, AssistantResponse};
pub use auth::{LoginRequest, LoginResponse};
pub use ping::{PingResponse, ServerTime};
