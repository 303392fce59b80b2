//! Chat-completion backends for the assistant endpoint.
//!
//! Provides a [`ChatBackend`] trait with two implementations:
//! - [`OpenAiChat`] - OpenAI-compatible `chat/completions` client
//! - [`NullChat`] - Fixed notice used when no API key is configured

mod null_chat;
mod openai_chat;
mod service;

pub use null_chat::{NullChat, NOT_CONFIGURED_NOTICE};
pub use openai_chat::OpenAiChat;
pub use service::{ChatBackend, ChatError, ChatResult};

#[cfg(test)]
pub use service::MockChatBackend;
