// ABOUTME: HTTP handler for the chat relay endpoint
// ABOUTME: Validates the transcript, forwards it to the provider, and hides provider diagnostics

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::{error, warn};

use taskdeck_ai::{parse_transcript, RelayError};

use crate::response::{bad_request, error_response};
use crate::state::AppState;

const RELAY_FAILURE: &str = "Failed to process chat request";

/// Relay a chat transcript and return the assistant's reply
pub async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let result = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => match parse_transcript(&value) {
            Ok(transcript) => state.relay.relay(&transcript).await,
            Err(e) => Err(e),
        },
        Err(e) => {
            warn!("Chat request body is not JSON: {}", e);
            Err(RelayError::InvalidFormat)
        }
    };

    match result {
        Ok(reply) => Json(reply).into_response(),
        Err(e) if e.is_validation() => bad_request(e.to_string()),
        Err(e) => {
            error!("Error in chat relay: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, RELAY_FAILURE)
        }
    }
}
