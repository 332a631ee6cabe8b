//! Infrastructure layer for Ebios.
//!
//! Contains implementations of the ports defined in `ebios-core`: the Gemini
//! [`LlmProvider`](ebios_core::llm::provider::LlmProvider), the reqwest-backed
//! client transport and the JSON-file client storage. Also owns config
//! loading and data-directory resolution.

pub mod client;
pub mod config;
pub mod filesystem;
pub mod llm;
