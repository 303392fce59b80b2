//! Request layer: typed calls to the three backend endpoints.
//!
//! # Error taxonomy
//!
//! - [`ClientError::Network`] - the request never completed; the message is the
//!   underlying reason, including its source chain
//! - [`ClientError::InvalidCredentials`] / [`ClientError::RequestFailed`] - non-2xx
//!   status; the display message is collapsed per flow, the server's structured
//!   error is kept on the value
//! - [`ClientError::Decode`] - a success status with a body that does not match
//! - [`ClientError::Session`] - the token could not be persisted

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::error::Error as StdError;
use std::time::Duration;
use url::Url;

use crate::api::dto::{
    AssistantRequest, AssistantResponse, LoginRequest, LoginResponse, PingResponse,
};
use crate::client::session::SessionError;
use crate::error::ErrorBody;

/// Structured error reported by the server on a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    pub code: Option<String>,
    pub message: String,
}

#[derive(Deserialize)]
struct DetailBody {
    detail: String,
}

impl ServerError {
    /// Decodes either the `{"error": {"code", "message"}}` envelope or a
    /// `{"detail": "..."}` body. Returns `None` for anything else.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        if let Ok(envelope) = serde_json::from_slice::<ErrorBody>(body) {
            return Some(Self {
                code: Some(envelope.error.code),
                message: envelope.error.message,
            });
        }

        serde_json::from_slice::<DetailBody>(body)
            .ok()
            .map(|d| Self {
                code: None,
                message: d.detail,
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Network(String),

    #[error("Invalid credentials")]
    InvalidCredentials {
        status: u16,
        server: Option<ServerError>,
    },

    #[error("Request failed")]
    RequestFailed {
        status: u16,
        server: Option<ServerError>,
    },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ClientError {
    /// HTTP status for status-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::InvalidCredentials { status, .. }
            | ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server's own error, when it sent a decodable one.
    pub fn server_error(&self) -> Option<&ServerError> {
        match self {
            ClientError::InvalidCredentials { server, .. }
            | ClientError::RequestFailed { server, .. } => server.as_ref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(error_chain(&e))
        } else {
            ClientError::Network(error_chain(&e))
        }
    }
}

/// Joins an error and its sources: `outer: inner: root`.
fn error_chain(e: &dyn StdError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// HTTP client for the dashboard backend.
///
/// No retries. Requests only time out when a timeout was configured.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    /// Creates a client for `base_url` with an optional per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(base_url, builder.build()?))
    }

    pub fn with_client(base_url: Url, http: Client) -> Self {
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// `POST /api/auth/login`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status becomes [`ClientError::InvalidCredentials`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.endpoint("/api/auth/login"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, server) = rejection(response, "login").await;
            return Err(ClientError::InvalidCredentials { status, server });
        }

        decode(response).await
    }

    /// `GET /api/ping`, unauthenticated.
    ///
    /// The status code is not inspected: any body that decodes is returned.
    pub async fn ping(&self) -> Result<PingResponse, ClientError> {
        let response = self.http.get(self.endpoint("/api/ping")).send().await?;
        decode(response).await
    }

    /// `POST /api/assistant` with `Authorization: Bearer <token>`.
    ///
    /// An empty `token` is sent as an empty credential.
    ///
    /// # Errors
    ///
    /// Any non-2xx status becomes [`ClientError::RequestFailed`].
    pub async fn assistant(
        &self,
        token: &str,
        prompt: &str,
    ) -> Result<AssistantResponse, ClientError> {
        let request = AssistantRequest {
            prompt: prompt.to_string(),
        };

        let response = self
            .http
            .post(self.endpoint("/api/assistant"))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, server) = rejection(response, "assistant").await;
            return Err(ClientError::RequestFailed { status, server });
        }

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Reads a rejected response's status and structured error, logging both.
async fn rejection(response: Response, operation: &str) -> (u16, Option<ServerError>) {
    let status = response.status().as_u16();
    let server = match response.bytes().await {
        Ok(body) => ServerError::from_body(&body),
        Err(e) => {
            tracing::debug!(error = %e, "Could not read error body");
            None
        }
    };

    match &server {
        Some(err) => tracing::warn!(
            operation,
            status,
            code = err.code.as_deref().unwrap_or("-"),
            message = %err.message,
            "Backend rejected request"
        ),
        None => tracing::warn!(operation, status, "Backend rejected request"),
    }

    (status, server)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_from_envelope() {
        let body = br#"{"error":{"code":"unauthorized","message":"Invalid credentials","details":{}}}"#;

        let err = ServerError::from_body(body).unwrap();
        assert_eq!(err.code.as_deref(), Some("unauthorized"));
        assert_eq!(err.message, "Invalid credentials");
    }

    #[test]
    fn test_server_error_from_detail() {
        let err = ServerError::from_body(br#"{"detail":"Invalid token"}"#).unwrap();

        assert_eq!(err.code, None);
        assert_eq!(err.message, "Invalid token");
    }

    #[test]
    fn test_server_error_from_garbage() {
        assert!(ServerError::from_body(b"<html>502</html>").is_none());
        assert!(ServerError::from_body(b"").is_none());
    }

    #[test]
    fn test_display_collapses_status_errors() {
        let server = Some(ServerError {
            code: Some("validation_error".to_string()),
            message: "email and password required".to_string(),
        });

        let login = ClientError::InvalidCredentials {
            status: 400,
            server: server.clone(),
        };
        let assistant = ClientError::RequestFailed {
            status: 502,
            server,
        };

        assert_eq!(login.to_string(), "Invalid credentials");
        assert_eq!(assistant.to_string(), "Request failed");
        assert_eq!(login.status(), Some(400));
        assert_eq!(
            login.server_error().map(|e| e.message.as_str()),
            Some("email and password required")
        );
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client =
            ApiClient::with_client(Url::parse("http://localhost:8000/").unwrap(), Client::new());

        assert_eq!(client.endpoint("/api/ping"), "http://localhost:8000/api/ping");
    }
}
