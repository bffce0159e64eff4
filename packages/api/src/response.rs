// ABOUTME: Shared API response types and error handling
// ABOUTME: Every failure leaves the server as an `{ "error": "..." }` body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use taskdeck_core::ValidationError;
use taskdeck_tasks::TodoError;

/// Error body shared by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Build an `{ "error": message }` response with the given status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

pub fn validation_error(err: ValidationError) -> Response {
    bad_request(err.to_string())
}

pub fn todo_error(err: TodoError) -> Response {
    match err {
        TodoError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Todo not found"),
    }
}
