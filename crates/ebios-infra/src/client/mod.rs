//! Client-side adapters: the reqwest transport and file-backed storage used
//! by the terminal chat client.

pub mod file_storage;
pub mod http_transport;

pub use file_storage::FileStorage;
pub use http_transport::HttpChatTransport;
