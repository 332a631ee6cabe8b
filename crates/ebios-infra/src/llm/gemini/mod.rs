//! Google Gemini LLM provider implementation.
//!
//! This module provides the [`GeminiProvider`] which implements the
//! [`LlmProvider`](ebios_core::llm::provider::LlmProvider) trait for the
//! `generateContent` endpoint of the Generative Language API.

pub mod client;
pub mod types;

pub use client::GeminiProvider;
