//! Server-side chat orchestration.
//!
//! `Persona` supplies the seed turns, `AiAdapter` performs the upstream call
//! and `ChatService` validates requests and records successful exchanges.

pub mod adapter;
pub mod persona;
pub mod service;
