//! Handler for the login endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges email and password for a bearer token.
///
/// # Endpoint
///
/// `POST /api/auth/login` (public)
///
/// # Request Body
///
/// ```json
/// { "email": "admin@example.com", "password": "..." }
/// ```
///
/// # Response
///
/// ```json
/// { "access_token": "eyJzdWIi...", "token_type": "bearer" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` if either field is missing or empty
/// - `401 Unauthorized` if the credentials do not match an account
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let token = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse::bearer(token)))
}
