//! In-memory session store.
//!
//! `SessionStore` maps a client-chosen session id to that session's ordered
//! conversation turns. It is volatile: a process restart forgets every
//! session. Clones share the same underlying map.
//!
//! Turns are appended one exchange (user + model) at a time. The window sent
//! upstream is the two seed turns followed by the stored turns, and that
//! window never exceeds [`HISTORY_CAP`]: when an exchange pushes it over, the
//! oldest stored pair is dropped. One pair per exchange, so a full session
//! holds the latest nine exchanges.

use std::sync::Arc;

use dashmap::DashMap;

use ebios_types::chat::Turn;

/// Upper bound on seed turns plus stored turns.
pub const HISTORY_CAP: usize = 20;

/// Number of persona seed turns that precede stored turns upstream.
pub const SEED_TURNS: usize = 2;

/// Concurrent map from session id to stored turns.
///
/// Reads clone the turn list immediately so no `DashMap` guard is held
/// across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Vec<Turn>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the session's turns, creating an empty entry if absent.
    pub fn get_or_create(&self, session_id: &str) -> Vec<Turn> {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .value()
            .clone()
    }

    /// Append a user turn and a model turn, then enforce the cap.
    ///
    /// Both pushes happen under the entry's write guard, so concurrent
    /// exchanges on the same session never split a pair.
    pub fn append_exchange(&self, session_id: &str, user_text: &str, model_text: &str) {
        let mut turns = self.sessions.entry(session_id.to_string()).or_default();
        turns.push(Turn::user(user_text));
        turns.push(Turn::model(model_text));

        if SEED_TURNS + turns.len() > HISTORY_CAP {
            turns.drain(0..2);
            tracing::debug!(session_id, stored = turns.len(), "Dropped oldest exchange");
        }
    }

    /// Remove the session. Returns whether an entry existed.
    pub fn clear(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Whether a session entry currently exists.
    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
