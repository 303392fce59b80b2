//! Dashboard shell page.
//!
//! Serves the markup the dashboard client drives: the login and dashboard
//! containers and the element ids named by the client's view model.
//! Uses Askama templates for server-side rendering.

pub mod handlers;
pub mod routes;
