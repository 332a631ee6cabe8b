//! Shared domain types for Ebios.
//!
//! Conversation turns, client-side chat messages, the REST wire bodies,
//! LLM request/response shapes, configuration structs and the error enums
//! shared by every other crate.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
