//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`llm`] - Chat-completion backends for the assistant (OpenAI and no-op implementations)
//! - [`persistence`] - User repository implementations

pub mod llm;
pub mod persistence;
