//! Assistant service: validates prompts and dispatches them to a chat backend.

use serde_json::json;
use std::sync::Arc;

use crate::error::AppError;
use crate::infrastructure::llm::{ChatBackend, ChatError};

/// Forwards prompts from authenticated users to the configured [`ChatBackend`].
pub struct AssistantService {
    backend: Arc<dyn ChatBackend>,
}

impl AssistantService {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// Returns the assistant's reply to `prompt`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the prompt is blank
    /// - [`AppError::Upstream`] if the chat backend fails
    pub async fn ask(&self, prompt: &str) -> Result<String, AppError> {
        if prompt.trim().is_empty() {
            return Err(AppError::bad_request(
                "prompt required",
                json!({ "field": "prompt" }),
            ));
        }

        self.backend.complete(prompt).await.map_err(|e| {
            tracing::error!(error = %e, "Assistant backend failed");
            // Provider bodies stay in the log; clients only learn the status.
            let details = match e {
                ChatError::Status { status, .. } => json!({ "upstream_status": status }),
                ChatError::Http(_) => json!({}),
            };
            AppError::upstream("Assistant backend error", details)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::MockChatBackend;

    #[tokio::test]
    async fn test_ask_forwards_prompt() {
        let mut backend = MockChatBackend::new();
        backend
            .expect_complete()
            .withf(|prompt| prompt == "hello")
            .times(1)
            .returning(|_| Ok("hi there".to_string()));

        let service = AssistantService::new(Arc::new(backend));

        assert_eq!(service.ask("hello").await.unwrap(), "hi there");
    }

    #[tokio::test]
    async fn test_blank_prompt_rejected_without_backend_call() {
        let mut backend = MockChatBackend::new();
        backend.expect_complete().times(0);

        let service = AssistantService::new(Arc::new(backend));

        let result = service.ask("   \n").await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_backend_failure_maps_to_upstream() {
        let mut backend = MockChatBackend::new();
        backend.expect_complete().times(1).returning(|_| {
            Err(ChatError::Status {
                status: 429,
                body: "rate limited".to_string(),
            })
        });

        let service = AssistantService::new(Arc::new(backend));

        let result = service.ask("hello").await;
        assert!(matches!(result, Err(AppError::Upstream { .. })));
    }

    #[tokio::test]
    async fn test_upstream_body_not_exposed() {
        let mut backend = MockChatBackend::new();
        backend.expect_complete().times(1).returning(|_| {
            Err(ChatError::Status {
                status: 401,
                body: "invalid api key sk-live-1234".to_string(),
            })
        });

        let service = AssistantService::new(Arc::new(backend));

        match service.ask("hello").await {
            Err(AppError::Upstream { message, details }) => {
                assert_eq!(details, json!({ "upstream_status": 401 }));
                assert!(!details.to_string().contains("sk-live"));
                assert!(!message.contains("sk-live"));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
