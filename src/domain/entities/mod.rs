//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`User`] - A dashboard account that can log in
//! - [`TokenClaims`] - Payload carried by a signed bearer token
//!
//! `NewUser` is the creation counterpart of [`User`].

pub mod claims;
pub mod user;

pub use claims::TokenClaims;
pub use user::{NewUser, User};
