//! Shared fakes for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use ebios_types::api::{ChatRequest, ChatResponse, ClearHistoryResponse, HealthStatus};
use ebios_types::chat::{ChatMessage, MessageKind};
use ebios_types::error::ClientError;
use ebios_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use crate::client::notify::{Notification, NotificationKind};
use crate::client::transport::ChatTransport;
use crate::client::view::ChatView;
use crate::llm::provider::LlmProvider;

/// Provider that records every request and answers with a fixed outcome.
pub struct ScriptedProvider {
    reply: Result<String, String>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            requests: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Arc<Mutex<Vec<CompletionRequest>>> {
        Arc::clone(&self.requests)
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(CompletionResponse {
                content: text.clone(),
                model: request.model.clone(),
                finish_reason: Some("STOP".to_string()),
                usage: Usage::default(),
            }),
            Err(message) => Err(LlmError::Provider {
                message: message.clone(),
            }),
        }
    }
}

/// Everything a [`RecordingView`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Rendered(MessageKind, String),
    RevealStarted(String),
    Typing(bool),
    Notified(NotificationKind, String),
    Dismissed(u64),
    Cleared,
}

#[derive(Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
    revealed: Mutex<String>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Characters received through `reveal_char` since the last `begin_reveal`.
    pub fn revealed(&self) -> String {
        self.revealed.lock().unwrap().clone()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ChatView for RecordingView {
    fn render_message(&self, message: &ChatMessage) {
        self.record(ViewEvent::Rendered(message.kind, message.content.clone()));
    }

    fn begin_reveal(&self, message: &ChatMessage) {
        self.revealed.lock().unwrap().clear();
        self.record(ViewEvent::RevealStarted(message.content.clone()));
    }

    fn reveal_char(&self, ch: char) {
        self.revealed.lock().unwrap().push(ch);
    }

    fn set_typing(&self, visible: bool) {
        self.record(ViewEvent::Typing(visible));
    }

    fn show_notification(&self, notification: &Notification) {
        self.record(ViewEvent::Notified(
            notification.kind,
            notification.message.clone(),
        ));
    }

    fn dismiss_notification(&self, id: u64) {
        self.record(ViewEvent::Dismissed(id));
    }

    fn clear_messages(&self) {
        self.record(ViewEvent::Cleared);
    }
}

#[derive(Default)]
struct TransportState {
    fail: bool,
    reply: String,
    gate: Option<Notify>,
    chat_requests: Mutex<Vec<ChatRequest>>,
    clear_calls: AtomicUsize,
}

/// In-memory transport. Either every call succeeds or every call fails
/// with a network error.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<TransportState>,
}

impl FakeTransport {
    pub fn replying(reply: &str) -> Self {
        Self {
            state: Arc::new(TransportState {
                reply: reply.to_string(),
                ..TransportState::default()
            }),
        }
    }

    pub fn failing() -> Self {
        Self {
            state: Arc::new(TransportState {
                fail: true,
                ..TransportState::default()
            }),
        }
    }

    /// Hold every chat call until [`FakeTransport::release`] is called.
    pub fn gated(self) -> Self {
        let state = TransportState {
            fail: self.state.fail,
            reply: self.state.reply.clone(),
            gate: Some(Notify::new()),
            ..TransportState::default()
        };
        Self {
            state: Arc::new(state),
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.state.gate {
            gate.notify_one();
        }
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.state.chat_requests.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) -> usize {
        self.state.clear_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), ClientError> {
        if self.state.fail {
            Err(ClientError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ChatTransport for FakeTransport {
    async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.check()?;
        Ok(HealthStatus {
            status: HealthStatus::ONLINE.to_string(),
            service: "Ebios AI".to_string(),
            version: "1.5".to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
        })
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        self.state.chat_requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.state.gate {
            gate.notified().await;
        }
        self.check()?;
        Ok(ChatResponse {
            response: self.state.reply.clone(),
        })
    }

    async fn clear_history(&self, _session_id: &str) -> Result<ClearHistoryResponse, ClientError> {
        self.state.clear_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(ClearHistoryResponse { success: true })
    }
}
