//! Property-based tests for conversation history invariants
//!
//! - Stats always add up and match the snapshot length
//! - Snapshots preserve content and order, and are detached from the manager

use super::{ConversationManager, Message};
use crate::llm::testing::MockLlmClient;
use crate::llm::{CompletionParams, MessageRole};
use proptest::prelude::*;
use std::sync::Arc;

/// Add operations: role plus raw (untrimmed) text
fn arb_ops() -> impl Strategy<Value = Vec<(MessageRole, String)>> {
    proptest::collection::vec(
        (
            prop_oneof![Just(MessageRole::User), Just(MessageRole::Assistant)],
            "[ \t]{0,3}[a-zA-Z0-9 +=?.!]{0,40}[ \n]{0,3}",
        ),
        0..30,
    )
}

fn apply(ops: &[(MessageRole, String)]) -> ConversationManager {
    let mut manager = ConversationManager::new(
        Arc::new(MockLlmClient::new()),
        CompletionParams::default(),
        None,
    );
    for (role, text) in ops {
        match role {
            MessageRole::User => manager.add_user_message(text),
            _ => manager.add_assistant_message(text),
        };
    }
    manager
}

proptest! {
    #[test]
    fn prop_stats_add_up(ops in arb_ops()) {
        let manager = apply(&ops);
        let stats = manager.stats();

        prop_assert_eq!(stats.total, stats.user + stats.assistant);
        prop_assert_eq!(stats.total, manager.messages().len());
        prop_assert_eq!(stats.total, ops.len());
        prop_assert_eq!(
            stats.user,
            ops.iter().filter(|(role, _)| *role == MessageRole::User).count()
        );
    }

    #[test]
    fn prop_snapshot_preserves_order_and_content(ops in arb_ops()) {
        let manager = apply(&ops);
        let snapshot = manager.messages();

        prop_assert_eq!(snapshot.len(), ops.len());
        for (message, (role, text)) in snapshot.iter().zip(&ops) {
            prop_assert_eq!(message.role(), *role);
            prop_assert_eq!(message.content(), text.trim());
        }
    }

    #[test]
    fn prop_snapshot_is_detached(ops in arb_ops(), extra in "[a-z]{1,10}") {
        let manager = apply(&ops);
        let before = manager.messages();

        let mut snapshot = manager.messages();
        snapshot.push(Message::user(&extra));
        snapshot.reverse();

        prop_assert_eq!(manager.messages(), before);
    }

    #[test]
    fn prop_clear_resets(ops in arb_ops()) {
        let mut manager = apply(&ops);
        let preamble = manager.preamble().to_string();
        manager.clear();

        prop_assert!(manager.messages().is_empty());
        prop_assert_eq!(manager.stats().total, 0);
        prop_assert_eq!(manager.preamble(), preamble.as_str());
    }
}
