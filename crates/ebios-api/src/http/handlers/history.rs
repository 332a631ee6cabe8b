//! `POST /api/clear-history`

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use ebios_types::api::{ClearHistoryRequest, ClearHistoryResponse};

use crate::state::AppState;

/// Forget a session's stored turns. Always succeeds, even for a missing or
/// unknown session id.
pub async fn clear_history(
    State(state): State<AppState>,
    payload: Result<Json<ClearHistoryRequest>, JsonRejection>,
) -> Json<ClearHistoryResponse> {
    let session_id = payload.ok().and_then(|Json(request)| request.session_id);
    state.chat_service.clear_history(session_id.as_deref());
    Json(ClearHistoryResponse { success: true })
}
