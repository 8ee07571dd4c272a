//! LLM provider abstraction
//!
//! Provides the transport seam between the conversation manager and a hosted
//! chat-completion endpoint.

mod config;
mod error;
mod openai;
#[cfg(test)]
pub mod testing;
mod types;

pub use config::{CompletionParams, LlmConfig};
pub use error::{LlmError, LlmErrorKind};
pub use openai::OpenAIService;
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for completion endpoints
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Make a completion request authenticated with `api_key`
    async fn complete(&self, api_key: &str, request: &LlmRequest)
        -> Result<LlmResponse, LlmError>;

    /// Name of the provider, used in logs
    fn provider(&self) -> &str;
}

/// Logging wrapper for LLM services
pub struct LoggingService {
    inner: Arc<dyn LlmService>,
    provider: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn LlmService>) -> Self {
        let provider = inner.provider().to_string();
        Self { inner, provider }
    }
}

#[async_trait]
impl LlmService for LoggingService {
    async fn complete(
        &self,
        api_key: &str,
        request: &LlmRequest,
    ) -> Result<LlmResponse, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(api_key, request).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(
                    provider = %self.provider,
                    model = %request.model,
                    messages = request.messages.len(),
                    duration_ms = %duration.as_millis(),
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "LLM request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    provider = %self.provider,
                    model = %request.model,
                    duration_ms = %duration.as_millis(),
                    kind = ?e.kind,
                    status = ?e.status,
                    error = %e.message,
                    "LLM request failed"
                );
            }
        }

        result
    }

    fn provider(&self) -> &str {
        &self.provider
    }
}
