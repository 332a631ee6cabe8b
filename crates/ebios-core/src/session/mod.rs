//! Server-side conversation state.

pub mod store;
