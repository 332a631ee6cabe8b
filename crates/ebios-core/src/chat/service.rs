//! Chat service: request validation plus the store/adapter round trip.
//!
//! The exchange is snapshot -> upstream call -> append. The store is only
//! touched after a successful reply, so a failed call leaves the session
//! exactly as it was. Two requests for the same session racing through the
//! upstream call may interleave their exchanges; each exchange still lands
//! as an intact pair.

use tracing::{info, warn};

use ebios_types::error::ChatError;

use crate::session::store::SessionStore;

use super::adapter::AiAdapter;

const MISSING_FIELDS: &str = "Missing message or sessionId";

pub struct ChatService {
    store: SessionStore,
    adapter: AiAdapter,
}

impl ChatService {
    pub fn new(store: SessionStore, adapter: AiAdapter) -> Self {
        Self { store, adapter }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn adapter(&self) -> &AiAdapter {
        &self.adapter
    }

    /// Validate a chat request, call upstream and record the exchange.
    pub async fn handle_message(
        &self,
        message: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<String, ChatError> {
        let (message, session_id) = match (non_empty(message), non_empty(session_id)) {
            (Some(message), Some(session_id)) => (message, session_id),
            _ => return Err(ChatError::BadRequest(MISSING_FIELDS.to_string())),
        };

        let history = self.store.get_or_create(session_id);

        let reply = match self.adapter.generate_reply(&history, message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(session_id, error = %e, "Upstream call failed");
                return Err(ChatError::Upstream(e));
            }
        };

        self.store.append_exchange(session_id, message, &reply);
        info!(
            session_id,
            prior_turns = history.len(),
            reply_chars = reply.chars().count(),
            "Chat exchange recorded"
        );

        Ok(reply)
    }

    /// Forget a session. Missing or unknown ids are ignored.
    pub fn clear_history(&self, session_id: Option<&str>) -> bool {
        match non_empty(session_id) {
            Some(session_id) => {
                let existed = self.store.clear(session_id);
                if existed {
                    info!(session_id, "Session history cleared");
                }
                existed
            }
            None => false,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::adapter::GenerationSettings;
    use crate::chat::persona::Persona;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::session::store::{HISTORY_CAP, SEED_TURNS};
    use crate::test_support::ScriptedProvider;
    use ebios_types::chat::Turn;

    fn service(provider: ScriptedProvider) -> ChatService {
        let adapter = AiAdapter::new(
            BoxLlmProvider::new(provider),
            Persona::new("persona", "greeting"),
            GenerationSettings::default(),
        );
        ChatService::new(SessionStore::new(), adapter)
    }

    #[tokio::test]
    async fn test_first_message_records_exchange() {
        let svc = service(ScriptedProvider::replying("reply"));

        let reply = svc.handle_message(Some("Hello"), Some("abc")).await.unwrap();
        assert_eq!(reply, "reply");

        let turns = svc.store().get_or_create("abc");
        assert_eq!(turns, vec![Turn::user("Hello"), Turn::model("reply")]);

        let window = Persona::new("persona", "greeting").window(&turns);
        assert_eq!(window.len(), 4);
        assert_eq!(window[0], Turn::user("persona"));
    }

    #[tokio::test]
    async fn test_missing_fields_are_bad_request() {
        let provider = ScriptedProvider::replying("reply");
        let requests = provider.requests();
        let svc = service(provider);

        for (message, session) in [
            (None, Some("abc")),
            (Some("Hello"), None),
            (Some(""), Some("abc")),
            (Some("Hello"), Some("")),
        ] {
            let err = svc.handle_message(message, session).await.unwrap_err();
            assert!(matches!(err, ChatError::BadRequest(_)));
        }

        assert!(requests.lock().unwrap().is_empty());
        assert!(svc.store().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_leaves_store_untouched() {
        let svc = service(ScriptedProvider::failing("network down"));
        let err = svc.handle_message(Some("Hello"), Some("abc")).await.unwrap_err();

        assert!(matches!(err, ChatError::Upstream(_)));
        assert!(svc.store().get_or_create("abc").is_empty());
    }

    #[tokio::test]
    async fn test_history_is_forwarded_and_capped() {
        let provider = ScriptedProvider::replying("r");
        let requests = provider.requests();
        let svc = service(provider);

        for i in 0..15 {
            let message = format!("m{i}");
            svc.handle_message(Some(message.as_str()), Some("s")).await.unwrap();
        }

        let sent = requests.lock().unwrap();
        let last = sent.last().unwrap();
        // Window plus the new message.
        assert!(last.turns.len() <= HISTORY_CAP + 1);
        assert!(SEED_TURNS + svc.store().get_or_create("s").len() <= HISTORY_CAP);
    }

    #[tokio::test]
    async fn test_clear_history_then_fresh_session() {
        let provider = ScriptedProvider::replying("r");
        let requests = provider.requests();
        let svc = service(provider);

        svc.handle_message(Some("one"), Some("abc")).await.unwrap();
        assert!(svc.clear_history(Some("abc")));
        assert!(!svc.clear_history(Some("abc")));
        assert!(!svc.clear_history(None));

        svc.handle_message(Some("two"), Some("abc")).await.unwrap();
        let sent = requests.lock().unwrap();
        // Seeds + new message only: nothing from before the clear.
        assert_eq!(sent[1].turns.len(), 3);
        assert_eq!(svc.store().get_or_create("abc").len(), 2);
    }
}
