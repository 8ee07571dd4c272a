//! Plain-text transcript export

use super::message::Message;
use crate::llm::MessageRole;
use std::fmt::Write;

/// Returned instead of a transcript when there is nothing to export
pub const NO_HISTORY: &str = "No conversation history.";

const HEADER: &str = "=== Conversation Export ===\n\n";

fn role_label(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "You",
        MessageRole::Assistant => "AI Assistant",
        MessageRole::System => "System",
    }
}

/// Header line, then one `[timestamp] Label:\ncontent\n\n` block per message
pub fn render(messages: &[Message]) -> String {
    if messages.is_empty() {
        return NO_HISTORY.to_string();
    }

    let mut out = String::from(HEADER);
    for message in messages {
        let _ = write!(
            out,
            "[{}] {}:\n{}\n\n",
            message.timestamp(),
            role_label(message.role()),
            message.content()
        );
    }
    out
}
