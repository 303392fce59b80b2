//! Handler for the status endpoint.

use axum::Json;
use chrono::Utc;

use crate::api::dto::PingResponse;

/// Reports that the service is up, with the current server time.
///
/// # Endpoint
///
/// `GET /api/ping` (public)
///
/// # Response
///
/// ```json
/// { "ok": true, "t": "2024-01-15T13:05:09.123456Z" }
/// ```
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse::operational(Utc::now()))
}
