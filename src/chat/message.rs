//! Conversation history records

use crate::llm::{LlmMessage, MessageRole};
use chrono::Local;
use serde::Serialize;

/// Wall-clock format stamped on every message
const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// A message in a conversation.
///
/// Fields are private so a recorded message cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    role: MessageRole,
    content: String,
    timestamp: String,
}

impl Message {
    /// Creates a message stamped with the current local time.
    ///
    /// Content is trimmed of surrounding whitespace.
    pub fn new(role: MessageRole, content: &str) -> Self {
        Self::with_timestamp(role, content, Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    pub(crate) fn with_timestamp(
        role: MessageRole,
        content: &str,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            role,
            content: content.trim().to_string(),
            timestamp: timestamp.into(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: &str) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Wire form: role and content, timestamp dropped
    pub fn to_llm_message(&self) -> LlmMessage {
        LlmMessage::new(self.role, self.content.clone())
    }
}
