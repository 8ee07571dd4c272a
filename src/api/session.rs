//! Per-session service registries

use crate::chat::ServiceRegistry;
use crate::llm::{CompletionParams, LlmService};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// A session's registry. Turns within one session run one at a time.
pub type SessionHandle = Arc<Mutex<ServiceRegistry>>;

/// In-memory sessions; nothing survives a restart
pub struct SessionStore {
    llm: Arc<dyn LlmService>,
    params: CompletionParams,
    default_api_key: Option<String>,
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionStore {
    pub fn new(
        llm: Arc<dyn LlmService>,
        params: CompletionParams,
        default_api_key: Option<String>,
    ) -> Self {
        Self {
            llm,
            params,
            default_api_key,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a session holding the preset services
    pub async fn create(&self) -> (String, SessionHandle) {
        let id = uuid::Uuid::new_v4().to_string();
        let registry = ServiceRegistry::with_presets(
            &self.llm,
            &self.params,
            self.default_api_key.as_deref(),
        );
        let handle = Arc::new(Mutex::new(registry));
        self.sessions.write().await.insert(id.clone(), handle.clone());
        tracing::info!(session_id = %id, "Session created");
        (id, handle)
    }

    pub async fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Drop a session and its history. Returns false if it did not exist.
    pub async fn remove(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            tracing::info!(session_id = %id, "Session removed");
        }
        removed
    }

    #[allow(dead_code)] // Used in tests
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
