//! HTTP/REST API layer for Ebios.
//!
//! Three JSON endpoints under `/api/` plus optional static widget assets.

pub mod error;
pub mod handlers;
pub mod router;

#[cfg(test)]
mod test_support;
