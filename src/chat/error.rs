//! Classified completion failures

use crate::llm::{LlmError, LlmErrorKind};
use serde::Serialize;
use thiserror::Error;

/// Why a completion request did not produce a response.
///
/// The `Display` text is the fixed user-facing message recorded in history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// No credential set; detected before any network call
    #[error("❌ API key not configured.")]
    NotConfigured,
    /// Blank input; detected before any network call
    #[error("❌ Empty message provided.")]
    EmptyMessage,
    #[error("❌ Authentication failed. Please check your OpenAI API key.")]
    Authentication,
    #[error("❌ Rate limit exceeded. Please try again later.")]
    RateLimited,
    /// Structured failure with the provider's detail text
    #[error("❌ OpenAI API error: {0}")]
    Provider(String),
    /// Anything else, with the raw error text
    #[error("❌ Unexpected error: {0}")]
    Unclassified(String),
}

impl From<LlmError> for CompletionError {
    fn from(err: LlmError) -> Self {
        match err.kind {
            LlmErrorKind::Auth => Self::Authentication,
            LlmErrorKind::RateLimit => Self::RateLimited,
            LlmErrorKind::Provider => Self::Provider(err.message),
            LlmErrorKind::Network | LlmErrorKind::Unknown => Self::Unclassified(err.message),
        }
    }
}

/// Flattened `(text, success)` view of a completion result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionOutcome {
    pub text: String,
    pub success: bool,
}

impl From<Result<String, CompletionError>> for CompletionOutcome {
    fn from(result: Result<String, CompletionError>) -> Self {
        match result {
            Ok(text) => Self {
                text,
                success: true,
            },
            Err(e) => Self {
                text: e.to_string(),
                success: false,
            },
        }
    }
}
