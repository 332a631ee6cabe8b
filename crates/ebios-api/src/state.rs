//! Application state shared by the REST handlers.
//!
//! The session store lives inside the chat service; there is exactly one
//! per server process and it is handed to handlers through axum `State`.

use std::path::PathBuf;
use std::sync::Arc;

use ebios_core::chat::adapter::{AiAdapter, GenerationSettings};
use ebios_core::chat::persona::Persona;
use ebios_core::chat::service::ChatService;
use ebios_core::llm::box_provider::BoxLlmProvider;
use ebios_core::session::store::SessionStore;
use ebios_infra::config::resolve_api_key;
use ebios_infra::llm::create_provider;
use ebios_types::config::GlobalConfig;

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    /// Static widget assets, when the directory exists.
    pub public_dir: Option<PathBuf>,
}

impl AppState {
    /// Build the server state: resolve the API key and wire the Gemini
    /// provider into a fresh session store.
    pub fn init(config: &GlobalConfig) -> anyhow::Result<Self> {
        let api_key = resolve_api_key(|key| std::env::var(key).ok())?;
        let provider = create_provider(&config.server, api_key)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Build the state around an already constructed provider.
    pub fn with_provider(config: &GlobalConfig, provider: BoxLlmProvider) -> Self {
        let adapter = AiAdapter::new(
            provider,
            Persona::from(&config.persona),
            GenerationSettings::from(&config.server),
        );
        let chat_service = ChatService::new(SessionStore::new(), adapter);

        let public_dir = PathBuf::from(&config.server.public_dir);
        let public_dir = public_dir.is_dir().then_some(public_dir);

        Self {
            chat_service: Arc::new(chat_service),
            public_dir,
        }
    }
}
