//! Application layer services implementing business logic.
//!
//! Services consume repository and backend traits and provide a clean API for
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential checks and bearer token issuance
//! - [`services::assistant_service::AssistantService`] - Prompt validation and chat dispatch

pub mod services;
