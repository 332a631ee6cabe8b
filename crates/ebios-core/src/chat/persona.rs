//! Persona seed turns.

use ebios_types::chat::Turn;
use ebios_types::config::PersonaConfig;

/// The fixed persona prepended to every upstream conversation.
#[derive(Debug, Clone)]
pub struct Persona {
    system_prompt: String,
    greeting: String,
}

impl Persona {
    pub fn new(system_prompt: impl Into<String>, greeting: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            greeting: greeting.into(),
        }
    }

    /// The persona instruction (as a user turn) and its acknowledgement
    /// (as a model turn).
    pub fn seed_turns(&self) -> [Turn; 2] {
        [
            Turn::user(self.system_prompt.clone()),
            Turn::model(self.greeting.clone()),
        ]
    }

    /// Seed turns followed by the stored session turns.
    pub fn window(&self, stored: &[Turn]) -> Vec<Turn> {
        let mut turns = Vec::with_capacity(stored.len() + 3);
        turns.extend(self.seed_turns());
        turns.extend_from_slice(stored);
        turns
    }
}

impl From<&PersonaConfig> for Persona {
    fn from(config: &PersonaConfig) -> Self {
        Self::new(config.system_prompt.clone(), config.greeting.clone())
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::from(&PersonaConfig::default())
    }
}
