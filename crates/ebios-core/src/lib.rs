//! Business logic and port traits for Ebios.
//!
//! Server side: the in-memory [`session::store::SessionStore`], the
//! persona-seeded [`chat::adapter::AiAdapter`] and the
//! [`chat::service::ChatService`] that ties them together.
//!
//! Client side: the browser-independent [`client::controller::ChatController`]
//! with its transport, storage and view ports.
//!
//! Depends only on `ebios-types` -- never on `ebios-infra` or any HTTP crate.

pub mod chat;
pub mod client;
pub mod llm;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
