//! `POST /api/chat`

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use ebios_types::api::{ChatRequest, ChatResponse};

use crate::http::error::AppError;
use crate::state::AppState;

/// Forward one user message upstream and return the reply.
///
/// An unreadable body is treated like an empty one, so it fails the
/// required-field check with a 400 rather than an extractor error.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable chat request body");
            ChatRequest::default()
        }
    };

    let response = state
        .chat_service
        .handle_message(request.message.as_deref(), request.session_id.as_deref())
        .await?;

    Ok(Json(ChatResponse { response }))
}
