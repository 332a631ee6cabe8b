//! Conversation types.
//!
//! A [`Turn`] is what the server stores and forwards upstream. A
//! [`ChatMessage`] is what the client keeps locally and persists: it carries
//! a display timestamp and uses `assistant` rather than `model` for replies.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Author of a conversation turn, using the upstream API's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Model => write!(f, "model"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "model" => Ok(Role::Model),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// One role-tagged utterance in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Who a client-side message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Assistant,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::User => write!(f, "user"),
            MessageKind::Assistant => write!(f, "assistant"),
        }
    }
}

/// A message in the client's local history.
///
/// Serialized as `{ "type": "...", "content": "...", "timestamp": "HH:MM" }`,
/// which is the shape written to client storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: String,
}

impl ChatMessage {
    /// Build a message stamped with the current local time.
    pub fn now(kind: MessageKind, content: impl Into<String>) -> Self {
        Self::at(kind, content, Local::now())
    }

    /// Build a message stamped with the given time (hours and minutes only).
    pub fn at(kind: MessageKind, content: impl Into<String>, time: DateTime<Local>) -> Self {
        Self {
            kind,
            content: content.into(),
            timestamp: time.format("%H:%M").to_string(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.kind == MessageKind::User
    }
}
