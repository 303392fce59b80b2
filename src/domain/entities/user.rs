//! User entity representing a dashboard account.

use chrono::{DateTime, Utc};

/// A dashboard account.
///
/// `password_hash` is a bcrypt hash produced by
/// [`crate::application::services::auth_service::hash_password`]; raw passwords are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}
