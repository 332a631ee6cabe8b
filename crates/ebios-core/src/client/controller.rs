//! Chat controller: the client's conversation state and send flow.
//!
//! `send_message` is the only path that talks to the chat endpoint. While a
//! request is in flight `is_typing` is set and further sends are ignored;
//! everything else (clearing, status checks, navigation) stays available.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use ebios_types::api::ChatRequest;
use ebios_types::chat::{ChatMessage, MessageKind};
use ebios_types::config::ClientConfig;
use ebios_types::error::ClientError;

use super::features;
use super::notify::{NotificationCenter, NotificationKind};
use super::sections::{Section, SectionSwitcher, UnknownSection};
use super::storage::{self, KeyValueStorage};
use super::transport::ChatTransport;
use super::typewriter::{RevealHandle, Typewriter};
use super::view::ChatView;

/// Shown in place of a reply when the chat request fails.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong while reaching the AI. \
    I'm Ebios AI in offline mode, but I can still help you with the basics.";

/// What happened to a `send_message` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input, or a reply was still pending. Nothing changed.
    Ignored,
    /// The server replied; the reply is being revealed.
    Replied(ChatMessage),
    /// The request failed; the fallback message was shown.
    Failed(ChatMessage),
}

pub struct ChatController<T, S> {
    session_id: String,
    greeting: String,
    transport: T,
    storage: S,
    view: Arc<dyn ChatView>,
    messages: Mutex<Vec<ChatMessage>>,
    is_typing: AtomicBool,
    typewriter: Typewriter,
    reveal: Mutex<Option<RevealHandle>>,
    notifications: NotificationCenter,
    sections: Mutex<SectionSwitcher>,
}

impl<T: ChatTransport, S: KeyValueStorage> ChatController<T, S> {
    /// Build a controller, restore any saved history for the stored session
    /// id, then show the welcome greeting after it.
    pub fn new(transport: T, storage: S, view: Arc<dyn ChatView>, config: &ClientConfig) -> Self {
        let session_id = storage::session_id(&storage);
        let notifications = NotificationCenter::new(
            Arc::clone(&view),
            Duration::from_millis(config.notification_ms),
        );

        let controller = Self {
            session_id,
            greeting: config.initial_greeting.clone(),
            transport,
            storage,
            view,
            messages: Mutex::new(Vec::new()),
            is_typing: AtomicBool::new(false),
            typewriter: Typewriter::new(Duration::from_millis(config.typing_speed_ms)),
            reveal: Mutex::new(None),
            notifications,
            sections: Mutex::new(SectionSwitcher::new()),
        };

        let restored =
            storage::load_history(&controller.storage, &controller.session_id, &controller.greeting);
        if !restored.is_empty() {
            info!(count = restored.len(), "Restored chat history");
        }
        for message in restored {
            controller.view.render_message(&message);
            controller.push(message);
        }

        controller.show_welcome();

        controller
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.messages).clone()
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing.load(Ordering::Acquire)
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn current_section(&self) -> Section {
        lock(&self.sections).current()
    }

    /// Send `text` to the server and show the reply.
    pub async fn send_message(&self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        if self
            .is_typing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Send ignored while a reply is pending");
            return SendOutcome::Ignored;
        }

        let user = ChatMessage::now(MessageKind::User, text);
        self.view.render_message(&user);
        self.push(user);

        let result = {
            let _typing = TypingGuard::show(&self.is_typing, &*self.view);
            let request = ChatRequest::new(text, self.session_id.as_str());
            self.transport.send_chat(&request).await
        };

        match result {
            Ok(response) => {
                let reply = ChatMessage::now(MessageKind::Assistant, response.response);
                self.push(reply.clone());
                self.start_reveal(&reply);
                self.persist();
                SendOutcome::Replied(reply)
            }
            Err(e) => {
                warn!(error = %e, "Chat request failed");
                let fallback = ChatMessage::now(MessageKind::Assistant, FALLBACK_REPLY);
                self.view.render_message(&fallback);
                self.push(fallback.clone());
                SendOutcome::Failed(fallback)
            }
        }
    }

    /// Wait until the current reveal (if any) has finished.
    ///
    /// Returns `false` if the reveal was cancelled.
    pub async fn wait_for_reveal(&self) -> bool {
        let handle = lock(&self.reveal).take();
        match handle {
            Some(handle) => handle.finished().await,
            None => true,
        }
    }

    /// Ask the server to forget this session, then reset the local view to
    /// the welcome greeting.
    pub async fn clear_history(&self) -> Result<(), ClientError> {
        if let Err(e) = self.transport.clear_history(&self.session_id).await {
            warn!(error = %e, "Clearing history failed");
            self.notifications
                .show(NotificationKind::Error, "Could not clear chat history");
            return Err(e);
        }

        if let Some(handle) = lock(&self.reveal).take() {
            handle.cancel();
        }
        lock(&self.messages).clear();
        self.view.clear_messages();
        self.show_welcome();
        self.persist();

        info!(session_id = %self.session_id, "Chat history cleared");
        self.notifications
            .show(NotificationKind::Success, "Chat history cleared");
        Ok(())
    }

    /// Probe `/api/health`. Returns whether the server reported itself online.
    pub async fn check_server_status(&self) -> bool {
        match self.transport.health().await {
            Ok(status) if status.is_online() => {
                self.notifications.show(
                    NotificationKind::Success,
                    format!("Connected to {} {}", status.service, status.version),
                );
                true
            }
            Ok(status) => {
                warn!(status = %status.status, "Server is not online");
                false
            }
            Err(e) => {
                warn!(error = %e, "Cannot reach the server");
                self.notifications.show(
                    NotificationKind::Error,
                    "Cannot reach the server. Please try again.",
                );
                false
            }
        }
    }

    /// Prompt template for a feature card, announced with a notification.
    pub fn use_feature(&self, feature: &str) -> String {
        let prompt = features::prompt_for(feature);
        self.notifications.show(
            NotificationKind::Info,
            format!("Selected feature: {}", feature.trim()),
        );
        prompt
    }

    /// Make `name` the single visible section.
    pub fn switch_section(&self, name: &str) -> Result<Section, UnknownSection> {
        let section: Section = name.parse()?;
        lock(&self.sections).switch(section);
        self.notifications
            .show(NotificationKind::Info, format!("Switched to {section}"));
        Ok(section)
    }

    fn show_welcome(&self) {
        let welcome = ChatMessage::now(MessageKind::Assistant, self.greeting.clone());
        self.view.render_message(&welcome);
        self.push(welcome);
    }

    fn start_reveal(&self, message: &ChatMessage) {
        self.view.begin_reveal(message);
        let view = Arc::clone(&self.view);
        let handle = self
            .typewriter
            .reveal(&message.content, move |ch| view.reveal_char(ch));

        if let Some(previous) = lock(&self.reveal).replace(handle) {
            previous.cancel();
        }
    }

    fn push(&self, message: ChatMessage) {
        lock(&self.messages).push(message);
    }

    fn persist(&self) {
        let messages = self.messages();
        if let Err(e) = storage::save_history(&self.storage, &self.session_id, &messages) {
            warn!(error = %e, "Could not save chat history");
        }
    }
}

/// Typing indicator and `is_typing` flag for the duration of a request.
///
/// Reset on drop, so an abandoned send never leaves the controller stuck.
struct TypingGuard<'a> {
    flag: &'a AtomicBool,
    view: &'a dyn ChatView,
}

impl<'a> TypingGuard<'a> {
    fn show(flag: &'a AtomicBool, view: &'a dyn ChatView) -> Self {
        view.set_typing(true);
        Self { flag, view }
    }
}

impl Drop for TypingGuard<'_> {
    fn drop(&mut self) {
        self.view.set_typing(false);
        self.flag.store(false, Ordering::Release);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
