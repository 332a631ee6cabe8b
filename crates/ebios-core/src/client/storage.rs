//! Client-side persistence.
//!
//! A synchronous string key/value port (browser local storage, or a JSON
//! file in the terminal client) plus the helpers that read and write the two things the
//! client keeps there: its session id and its message history.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::warn;
use uuid::Uuid;

use ebios_types::chat::ChatMessage;
use ebios_types::error::ClientError;

/// Key under which the stable session id is kept.
pub const SESSION_ID_KEY: &str = "ebios_session_id";

const HISTORY_KEY_PREFIX: &str = "ebios_chat_";

/// Synchronous string key/value storage.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;

    fn remove(&self, key: &str) -> Result<(), ClientError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        (**self).remove(key)
    }
}

/// Volatile storage, used when nothing should outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: DashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage key of a session's message history.
pub fn history_key(session_id: &str) -> String {
    format!("{HISTORY_KEY_PREFIX}{session_id}")
}

/// Return the stored session id, generating and storing a new one if absent.
///
/// A storage failure still yields a usable id; it just won't survive a
/// restart.
pub fn session_id<S: KeyValueStorage + ?Sized>(storage: &S) -> String {
    match storage.get(SESSION_ID_KEY) {
        Ok(Some(id)) if !id.is_empty() => return id,
        Ok(_) => {}
        Err(e) => warn!(error = %e, "Could not read stored session id"),
    }

    let id = format!("session_{}", Uuid::now_v7().simple());
    if let Err(e) = storage.set(SESSION_ID_KEY, &id) {
        warn!(error = %e, "Could not persist session id");
    }
    id
}

/// Load saved history for a session, dropping copies of the welcome greeting.
///
/// Unreadable or malformed history is logged and treated as empty.
pub fn load_history<S: KeyValueStorage + ?Sized>(
    storage: &S,
    session_id: &str,
    greeting: &str,
) -> Vec<ChatMessage> {
    let raw = match storage.get(&history_key(session_id)) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Could not read chat history");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<ChatMessage>>(&raw) {
        Ok(messages) => messages
            .into_iter()
            .filter(|m| m.content != greeting)
            .collect(),
        Err(e) => {
            warn!(error = %e, "Ignoring malformed chat history");
            Vec::new()
        }
    }
}

/// Persist the full message list for a session.
pub fn save_history<S: KeyValueStorage + ?Sized>(
    storage: &S,
    session_id: &str,
    messages: &[ChatMessage],
) -> Result<(), ClientError> {
    let json =
        serde_json::to_string(messages).map_err(|e| ClientError::Storage(e.to_string()))?;
    storage.set(&history_key(session_id), &json)
}
