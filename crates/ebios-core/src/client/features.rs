//! Feature cards and their prompt templates.

/// A card advertising one area the assistant helps with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Prompt placed in the input box when the card is chosen.
    pub prompt: &'static str,
}

pub const FEATURE_CARDS: [FeatureCard; 6] = [
    FeatureCard {
        icon: "💻",
        title: "Programming & Technology",
        description: "Explanations, code reviews and practical how-tos.",
        prompt: "Can you explain [tech topic] and show me how to apply it?",
    },
    FeatureCard {
        icon: "🎮",
        title: "Game Development",
        description: "Engines, design and game programming advice.",
        prompt: "Can you advise me on building a game with [engine/language]?",
    },
    FeatureCard {
        icon: "📚",
        title: "Learning & Research",
        description: "Concepts broken down step by step.",
        prompt: "Can you help me understand the concept of [concept name]?",
    },
    FeatureCard {
        icon: "🔍",
        title: "Information Lookup",
        description: "Quick answers on almost any subject.",
        prompt: "Can you find information about [topic] for me?",
    },
    FeatureCard {
        icon: "🤖",
        title: "AI Assistant",
        description: "Everyday tasks with an AI helper.",
        prompt: "Can you help me with [task] using AI?",
    },
    FeatureCard {
        icon: "✍️",
        title: "Creative Content",
        description: "Stories, posts and ideas.",
        prompt: "Can you help me write about [creative topic]?",
    },
];

/// Prompt template for a feature, matched case-insensitively on the card
/// title. Unknown features get a generic prompt naming the feature.
pub fn prompt_for(feature: &str) -> String {
    let wanted = feature.trim().to_lowercase();
    FEATURE_CARDS
        .iter()
        .find(|card| card.title.to_lowercase() == wanted)
        .map(|card| card.prompt.to_string())
        .unwrap_or_else(|| format!("Can you help me with {}?", feature.trim()))
}
