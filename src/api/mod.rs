//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Wire types shared with the dashboard client
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and tracing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
