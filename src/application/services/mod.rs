//! Business logic services for the application layer.

pub mod assistant_service;
pub mod auth_service;

pub use assistant_service::AssistantService;
pub use auth_service::AuthService;
