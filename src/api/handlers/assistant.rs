//! Handler for the assistant endpoint.

use axum::{Extension, Json, extract::State};

use crate::api::dto::{AssistantRequest, AssistantResponse};
use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// Sends the prompt to the chat backend and returns its reply.
///
/// # Endpoint
///
/// `POST /api/assistant` (Bearer token required)
///
/// # Errors
///
/// - `401 Unauthorized` if the token is missing or invalid (see [`crate::api::middleware::auth`])
/// - `400 Bad Request` if the prompt is blank
/// - `502 Bad Gateway` if the chat backend fails
pub async fn assistant_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<AssistantRequest>,
) -> Result<Json<AssistantResponse>, AppError> {
    tracing::debug!(email = %user.email, chars = payload.prompt.len(), "Assistant prompt");

    let text = state.assistant_service.ask(&payload.prompt).await?;

    Ok(Json(AssistantResponse { text }))
}
