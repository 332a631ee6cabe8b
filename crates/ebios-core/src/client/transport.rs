//! Port for talking to the proxy server.

use ebios_types::api::{ChatRequest, ChatResponse, ClearHistoryResponse, HealthStatus};
use ebios_types::error::ClientError;

/// The three REST calls the chat client makes.
///
/// Implemented over reqwest in `ebios-infra`.
pub trait ChatTransport: Send + Sync {
    /// `GET /api/health`
    fn health(&self) -> impl Future<Output = Result<HealthStatus, ClientError>> + Send;

    /// `POST /api/chat`. Any non-2xx status is an error.
    fn send_chat(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatResponse, ClientError>> + Send;

    /// `POST /api/clear-history`
    fn clear_history(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<ClearHistoryResponse, ClientError>> + Send;
}
