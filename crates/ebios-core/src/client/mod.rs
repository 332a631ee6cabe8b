//! Browser-independent chat client.
//!
//! The controller owns the conversation state (local messages, typing
//! guard, session id) and reaches the outside world only through three
//! ports: [`transport::ChatTransport`] for HTTP, [`storage::KeyValueStorage`]
//! for persistence and [`view::ChatView`] for presentation. Timers
//! (typewriter reveal, notification dismissal) are cancellable tokio tasks,
//! so tests can drive them with a paused clock.

pub mod controller;
pub mod features;
pub mod notify;
pub mod sections;
pub mod storage;
pub mod transport;
pub mod typewriter;
pub mod view;
