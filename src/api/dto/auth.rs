//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Credentials submitted by the login form.
///
/// Missing fields deserialize as empty strings so that the validation error,
/// not a JSON decoding error, is what the caller sees.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email and password required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "email and password required"))]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,

    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl LoginResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: default_token_type(),
        }
    }
}
