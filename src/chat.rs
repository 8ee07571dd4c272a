//! Conversation state
//!
//! A [`ConversationManager`] owns one conversation's history and preamble and
//! mediates calls to the completion endpoint. A [`ServiceRegistry`] holds
//! several independent managers under display names and tracks the active one.

mod error;
mod manager;
mod message;
#[cfg(test)]
mod proptests;
mod registry;
mod transcript;

#[allow(unused_imports)] // Public API re-exports
pub use error::{CompletionError, CompletionOutcome};
pub use manager::{ConversationManager, ConversationStats, Turn};
pub use message::Message;
pub use registry::ServiceRegistry;
