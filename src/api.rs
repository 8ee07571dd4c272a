//! HTTP API for the chat front-end
//!
//! Each browser session owns an independent [`ServiceRegistry`]; handlers
//! look the session up by id and operate on its active service.

mod handlers;
mod session;
mod types;

pub use handlers::create_router;
pub use session::SessionStore;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::llm::{LlmConfig, LlmService};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmService>, config: &LlmConfig) -> Self {
        Self {
            sessions: Arc::new(SessionStore::new(
                llm,
                config.params.clone(),
                config.openai_api_key.clone(),
            )),
        }
    }
}
