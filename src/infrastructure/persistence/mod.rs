//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryUserRepository`] - Process-local user directory, seeded at startup

pub mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
