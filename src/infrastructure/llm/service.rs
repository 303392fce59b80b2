//! Chat backend trait and error types.

use async_trait::async_trait;

/// Errors that can occur while talking to a chat-completion provider.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat provider returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Result type for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

/// Single-turn chat completion.
///
/// # Implementations
///
/// - [`crate::infrastructure::llm::OpenAiChat`] - remote provider
/// - [`crate::infrastructure::llm::NullChat`] - no provider configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends `prompt` as the user message and returns the reply text, trimmed.
    ///
    /// A reply without content yields an empty string rather than an error.
    async fn complete(&self, prompt: &str) -> ChatResult<String>;
}
