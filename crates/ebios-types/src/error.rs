use thiserror::Error;

use crate::llm::LlmError;

/// Errors raised while serving a chat request.
#[derive(Debug, Error)]
pub enum ChatError {
    /// A required request field was missing or empty.
    #[error("{0}")]
    BadRequest(String),

    /// The upstream generative API call failed.
    #[error("upstream error: {0}")]
    Upstream(#[from] LlmError),
}

/// Errors seen by the chat client. None of these reach the server.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors raised while assembling runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API key: set {0}")]
    MissingApiKey(&'static str),

    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_wraps_llm_error() {
        let err: ChatError = LlmError::RateLimited.into();
        assert!(matches!(err, ChatError::Upstream(LlmError::RateLimited)));
        assert_eq!(err.to_string(), "upstream error: rate limited");
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(ClientError::Status(500).to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_config_error_names_the_key() {
        let err = ConfigError::InvalidValue {
            key: "PORT",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for PORT: 'abc'");
    }
}
