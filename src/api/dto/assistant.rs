//! DTOs for the assistant endpoint.

use serde::{Deserialize, Serialize};

/// Free-text prompt. Blank prompts are rejected by the service, not the decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub prompt: String,
}

/// Assistant reply text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantResponse {
    pub text: String,
}
