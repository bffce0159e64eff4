// ABOUTME: Chat relay to an external language-model provider
// ABOUTME: Transcript types, relay validation, and the Gemini-backed provider

pub mod relay;
pub mod service;
pub mod types;

// Re-export relay types
pub use relay::{parse_transcript, ChatProvider, ChatRelay, RelayError};

// Re-export service types
pub use service::{AIServiceError, AIServiceResult, GeminiService, DEFAULT_MODEL};

pub use types::{ChatMessage, ChatRole};
