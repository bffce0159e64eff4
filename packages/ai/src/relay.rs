// ABOUTME: Stateless chat relay between a caller's transcript and a language-model provider
// ABOUTME: Validates the transcript, forwards it once, and wraps the reply as an assistant turn

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::service::{AIServiceError, AIServiceResult};
use crate::types::{ChatMessage, ChatRole};

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid messages format")]
    InvalidFormat,

    #[error("Last message must be from user")]
    LastMessageNotFromUser,

    #[error("Provider error: {0}")]
    Provider(#[from] AIServiceError),
}

impl RelayError {
    /// Validation failures are reported before any provider call is made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RelayError::InvalidFormat | RelayError::LastMessageNotFromUser
        )
    }
}

/// A language-model backend that answers one user message given prior turns
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn generate_reply(&self, history: &[ChatMessage], message: &str)
        -> AIServiceResult<String>;
}

/// Extracts the transcript from a `{ "messages": [...] }` request body
pub fn parse_transcript(body: &Value) -> Result<Vec<ChatMessage>, RelayError> {
    let messages = body
        .get("messages")
        .filter(|m| m.is_array())
        .ok_or(RelayError::InvalidFormat)?;

    let transcript: Vec<ChatMessage> =
        serde_json::from_value(messages.clone()).map_err(|_| RelayError::InvalidFormat)?;

    if transcript.is_empty() {
        return Err(RelayError::InvalidFormat);
    }

    Ok(transcript)
}

#[derive(Clone)]
pub struct ChatRelay {
    provider: Arc<dyn ChatProvider>,
}

impl ChatRelay {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Forwards the transcript and returns the provider's single reply.
    ///
    /// The last turn must come from the user; every earlier turn is sent as
    /// history. Nothing is cached or retried.
    pub async fn relay(&self, transcript: &[ChatMessage]) -> Result<ChatMessage, RelayError> {
        let (last, history) = transcript.split_last().ok_or(RelayError::InvalidFormat)?;

        if last.role != ChatRole::User {
            return Err(RelayError::LastMessageNotFromUser);
        }

        info!("Relaying chat message with {} prior turns", history.len());

        let reply = self.provider.generate_reply(history, &last.content).await?;
        Ok(ChatMessage::assistant(reply))
    }
}
