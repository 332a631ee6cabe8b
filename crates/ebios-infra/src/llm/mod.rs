//! LLM provider implementations.
//!
//! Contains the Gemini implementation of the [`LlmProvider`] trait defined
//! in `ebios-core`, plus the factory ([`create_provider`]) the server uses
//! to build it from [`ServerConfig`].
//!
//! [`LlmProvider`]: ebios_core::llm::provider::LlmProvider

pub mod gemini;

use std::time::Duration;

use secrecy::SecretString;

use ebios_core::llm::box_provider::BoxLlmProvider;
use ebios_types::config::ServerConfig;
use ebios_types::llm::LlmError;

use self::gemini::GeminiProvider;

/// Create a [`BoxLlmProvider`] for the configured upstream.
///
/// The API key has already been resolved from the environment.
pub fn create_provider(
    config: &ServerConfig,
    api_key: SecretString,
) -> Result<BoxLlmProvider, LlmError> {
    let provider = GeminiProvider::new(
        api_key,
        config.model.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?
    .with_base_url(config.upstream_base_url.as_str());
    Ok(BoxLlmProvider::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_gemini() {
        let config = ServerConfig::default();
        let provider = create_provider(&config, SecretString::from("gemini-key")).unwrap();
        assert_eq!(provider.name(), "gemini");
    }
}
