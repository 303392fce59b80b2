//! No-op chat backend used when the assistant is not configured.

use super::service::{ChatBackend, ChatResult};
use async_trait::async_trait;
use tracing::debug;

/// Reply returned for every prompt while no API key is configured.
pub const NOT_CONFIGURED_NOTICE: &str = "OPENAI_API_KEY not set on server. Add it to enable GPT.";

/// A chat backend that answers every prompt with [`NOT_CONFIGURED_NOTICE`].
pub struct NullChat;

impl NullChat {
    pub fn new() -> Self {
        debug!("Using NullChat (assistant disabled)");
        Self
    }
}

impl Default for NullChat {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatBackend for NullChat {
    async fn complete(&self, _prompt: &str) -> ChatResult<String> {
        Ok(NOT_CONFIGURED_NOTICE.to_string())
    }
}
