//! Upstream AI adapter.
//!
//! Wraps one non-streaming completion call: seed turns, then the session's
//! stored turns, then the new user message. Failures are returned to the
//! caller untouched; nothing is retried here.

use tracing::{Instrument, info_span};

use ebios_types::chat::Turn;
use ebios_types::config::ServerConfig;
use ebios_types::llm::{CompletionRequest, LlmError};

use crate::llm::box_provider::BoxLlmProvider;

use super::persona::Persona;

/// Fixed generation parameters applied to every upstream call.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl From<&ServerConfig> for GenerationSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::from(&ServerConfig::default())
    }
}

pub struct AiAdapter {
    provider: BoxLlmProvider,
    persona: Persona,
    settings: GenerationSettings,
}

impl AiAdapter {
    pub fn new(provider: BoxLlmProvider, persona: Persona, settings: GenerationSettings) -> Self {
        Self {
            provider,
            persona,
            settings,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Build the request sent upstream for `new_message`.
    pub fn build_request(&self, session_turns: &[Turn], new_message: &str) -> CompletionRequest {
        let mut turns = self.persona.window(session_turns);
        turns.push(Turn::user(new_message));

        CompletionRequest {
            model: self.settings.model.clone(),
            turns,
            max_tokens: self.settings.max_output_tokens,
            temperature: Some(self.settings.temperature),
        }
    }

    /// Ask the upstream model for a reply to `new_message`.
    pub async fn generate_reply(
        &self,
        session_turns: &[Turn],
        new_message: &str,
    ) -> Result<String, LlmError> {
        let request = self.build_request(session_turns, new_message);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
            gen_ai.request.turns = request.turns.len(),
        );

        let response = self.provider.complete(&request).instrument(span).await?;

        tracing::debug!(
            gen_ai.usage.input_tokens = response.usage.input_tokens,
            gen_ai.usage.output_tokens = response.usage.output_tokens,
            finish_reason = ?response.finish_reason,
            "Upstream reply received"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedProvider;

    fn adapter(provider: ScriptedProvider) -> AiAdapter {
        AiAdapter::new(
            BoxLlmProvider::new(provider),
            Persona::new("persona", "greeting"),
            GenerationSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_generate_reply_prepends_seed_turns() {
        let provider = ScriptedProvider::replying("Hi there");
        let requests = provider.requests();
        let adapter = adapter(provider);

        let history = vec![Turn::user("earlier"), Turn::model("reply")];
        let reply = adapter.generate_reply(&history, "Hello").await.unwrap();
        assert_eq!(reply, "Hi there");

        let sent = requests.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let turns = &sent[0].turns;
        assert_eq!(turns.len(), 5);
        assert_eq!(turns[0], Turn::user("persona"));
        assert_eq!(turns[1], Turn::model("greeting"));
        assert_eq!(turns[2], Turn::user("earlier"));
        assert_eq!(turns[4], Turn::user("Hello"));
    }

    #[tokio::test]
    async fn test_generate_reply_uses_fixed_settings() {
        let provider = ScriptedProvider::replying("ok");
        let requests = provider.requests();
        let adapter = adapter(provider);

        adapter.generate_reply(&[], "Hello").await.unwrap();

        let sent = requests.lock().unwrap();
        assert_eq!(sent[0].model, "gemini-1.5-flash");
        assert_eq!(sent[0].max_tokens, 2000);
        assert_eq!(sent[0].temperature, Some(0.7));
    }

    #[tokio::test]
    async fn test_generate_reply_propagates_failure() {
        let adapter = adapter(ScriptedProvider::failing("boom"));
        let err = adapter.generate_reply(&[], "Hello").await.unwrap_err();
        assert!(matches!(err, LlmError::Provider { .. }));
        assert!(err.to_string().contains("boom"));
    }
}
