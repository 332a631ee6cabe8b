//! [`ChatTransport`] over HTTP, talking to a running `ebios serve`.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use ebios_core::client::transport::ChatTransport;
use ebios_types::api::{
    ChatRequest, ChatResponse, ClearHistoryRequest, ClearHistoryResponse, HealthStatus,
};
use ebios_types::error::ClientError;

pub struct HttpChatTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status(status.as_u16()));
    }
    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

impl ChatTransport for HttpChatTransport {
    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .client
            .get(self.url("/api/health"))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        self.post("/api/chat", request).await
    }

    async fn clear_history(&self, session_id: &str) -> Result<ClearHistoryResponse, ClientError> {
        let body = ClearHistoryRequest {
            session_id: Some(session_id.to_string()),
        };
        self.post("/api/clear-history", &body).await
    }
}
