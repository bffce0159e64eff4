// ABOUTME: Chat service for Google Gemini generateContent calls
// ABOUTME: Maps transcripts to Gemini contents, sends one request, extracts the reply text

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use taskdeck_config::constants::{GEMINI_API_BASE_URL, GEMINI_MODEL, GOOGLE_API_KEY};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::relay::ChatProvider;
use crate::types::{ChatMessage, ChatRole};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum AIServiceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("No API key configured")]
    NoApiKey,

    #[error("Invalid response format")]
    InvalidResponse,
}

pub type AIServiceResult<T> = Result<T, AIServiceError>;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl Content {
    fn text(role: &str, text: impl Into<String>) -> Self {
        Content {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

/// Gemini role for a transcript turn: `user` stays `user`, everything else is `model`
fn gemini_role(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Assistant => "model",
    }
}

/// Builds the `contents` array: prior turns as history, then the new user message
pub fn build_contents(history: &[ChatMessage], message: &str) -> Vec<Content> {
    history
        .iter()
        .map(|msg| Content::text(gemini_role(msg.role), msg.content.clone()))
        .chain(std::iter::once(Content::text("user", message)))
        .collect()
}

/// Chat service backed by the Gemini generateContent endpoint
pub struct GeminiService {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiService {
    fn create_client(connect_timeout: Duration) -> AIServiceResult<Client> {
        Ok(Client::builder().connect_timeout(connect_timeout).build()?)
    }

    /// Creates a service from the environment.
    /// API key comes from GOOGLE_API_KEY; GEMINI_MODEL and GEMINI_API_BASE_URL override defaults.
    pub fn from_env(connect_timeout: Duration) -> AIServiceResult<Self> {
        let api_key = env::var(GOOGLE_API_KEY).ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            warn!("{} not set - chat requests will fail", GOOGLE_API_KEY);
        }

        let model = env::var(GEMINI_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        if model != DEFAULT_MODEL {
            info!("Using custom Gemini model: {}", model);
        }

        let base_url =
            env::var(GEMINI_API_BASE_URL).unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string());

        Ok(Self {
            client: Self::create_client(connect_timeout)?,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a service with explicit settings
    pub fn with_settings(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> AIServiceResult<Self> {
        let base_url = base_url.into();
        Ok(Self {
            client: Self::create_client(DEFAULT_CONNECT_TIMEOUT)?,
            api_key,
            model: model.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the model being used by this service
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the history plus one user message and returns the model's reply text
    pub async fn send_message(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> AIServiceResult<String> {
        let api_key = self.api_key.as_ref().ok_or(AIServiceError::NoApiKey)?;

        let request = GenerateContentRequest {
            contents: build_contents(history, message),
        };
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        info!(
            "Making Gemini request: model={}, turns={}",
            self.model,
            request.contents.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    error!("Failed to connect to Gemini API: {}", e);
                    AIServiceError::ApiError(format!("Connection failed: {}", e))
                } else {
                    error!("Gemini API request failed: {}", e);
                    AIServiceError::RequestFailed(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Gemini API error: {} - {}", status, error_text);
            return Err(AIServiceError::ApiError(format!(
                "API returned {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AIServiceError::ParseError(e.to_string()))?;

        if let Some(usage) = &body.usage_metadata {
            info!(
                "Gemini usage: prompt_tokens={}, reply_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AIServiceError::InvalidResponse);
        }

        Ok(text)
    }
}

#[async_trait]
impl ChatProvider for GeminiService {
    async fn generate_reply(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> AIServiceResult<String> {
        self.send_message(history, message).await
    }
}
