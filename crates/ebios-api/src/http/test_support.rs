//! Router test helpers: a stub upstream and a state built around it.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use ebios_core::llm::box_provider::BoxLlmProvider;
use ebios_core::llm::provider::LlmProvider;
use ebios_types::config::GlobalConfig;
use ebios_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use crate::state::AppState;

pub type Seen = Arc<Mutex<Vec<CompletionRequest>>>;

pub struct StubProvider {
    fail: bool,
    seen: Seen,
}

impl LlmProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut seen = self.seen.lock().unwrap();
        seen.push(request.clone());
        if self.fail {
            return Err(LlmError::RateLimited);
        }
        Ok(CompletionResponse {
            content: format!("reply {}", seen.len()),
            model: request.model.clone(),
            finish_reason: Some("STOP".to_string()),
            usage: Usage::default(),
        })
    }
}

/// State whose upstream answers `reply N` for the Nth call, or always fails.
pub fn stub_state(fail: bool) -> (AppState, Seen) {
    let seen = Seen::default();
    let provider = StubProvider {
        fail,
        seen: Arc::clone(&seen),
    };
    let mut config = GlobalConfig::default();
    config.server.public_dir = "does-not-exist".to_string();
    (
        AppState::with_provider(&config, BoxLlmProvider::new(provider)),
        seen,
    )
}

/// Send one request through the router, returning status and JSON body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
