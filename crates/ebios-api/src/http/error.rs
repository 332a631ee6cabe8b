//! Application error type mapping to HTTP status codes.
//!
//! Bodies are flat `{error, details?}` objects, the shape the chat widget
//! reads.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use ebios_types::api::ErrorBody;
use ebios_types::error::ChatError;

const GENERIC_FAILURE: &str = "An error occurred while processing the request";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Chat(ChatError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Chat(ChatError::BadRequest(message)) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: message,
                    details: None,
                },
            ),
            AppError::Chat(err @ ChatError::Upstream(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: GENERIC_FAILURE.to_string(),
                    details: Some(err.to_string()),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
