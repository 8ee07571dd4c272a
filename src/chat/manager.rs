//! Conversation manager: history, preamble, and the completion call

use super::error::{CompletionError, CompletionOutcome};
use super::message::Message;
use super::transcript;
use crate::llm::{CompletionParams, LlmMessage, LlmRequest, LlmService, MessageRole};
use crate::system_prompt::SCIENCE_MATH_PROMPT;
use serde::Serialize;
use std::sync::Arc;

/// Message counts by role
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversationStats {
    pub total: usize,
    pub user: usize,
    pub assistant: usize,
}

/// Result of one full turn
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub user_message: Message,
    pub assistant_message: Message,
    pub success: bool,
}

/// One conversation with a completion endpoint.
///
/// The preamble is fixed at construction. History only grows through the
/// `add_*` methods and `process_turn`, until `clear`.
pub struct ConversationManager {
    llm: Arc<dyn LlmService>,
    params: CompletionParams,
    api_key: String,
    preamble: String,
    messages: Vec<Message>,
}

impl ConversationManager {
    /// Manager using the science & math preamble
    #[allow(dead_code)] // Sessions are built from presets
    pub fn new(
        llm: Arc<dyn LlmService>,
        params: CompletionParams,
        api_key: Option<String>,
    ) -> Self {
        Self::with_preamble(llm, params, api_key, SCIENCE_MATH_PROMPT)
    }

    pub fn with_preamble(
        llm: Arc<dyn LlmService>,
        params: CompletionParams,
        api_key: Option<String>,
        preamble: impl Into<String>,
    ) -> Self {
        Self {
            llm,
            params,
            api_key: api_key.unwrap_or_default(),
            preamble: preamble.into(),
            messages: Vec::new(),
        }
    }

    #[allow(dead_code)] // API completeness
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Replace the credential; no format validation
    pub fn set_credential(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    pub fn has_valid_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn add_user_message(&mut self, text: &str) -> Message {
        self.push(Message::user(text))
    }

    pub fn add_assistant_message(&mut self, text: &str) -> Message {
        self.push(Message::assistant(text))
    }

    fn push(&mut self, message: Message) -> Message {
        self.messages.push(message.clone());
        message
    }

    /// Ask the endpoint to answer `user_text` in the context of the full history.
    ///
    /// `user_text` is not recorded; see [`Self::process_turn`].
    pub async fn request_completion(&self, user_text: &str) -> Result<String, CompletionError> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            tracing::debug!("Rejecting empty message");
            return Err(CompletionError::EmptyMessage);
        }
        if !self.has_valid_credential() {
            tracing::warn!("Completion requested without an API key");
            return Err(CompletionError::NotConfigured);
        }

        let request = self.build_request(user_text);
        match self.llm.complete(&self.api_key, &request).await {
            Ok(response) => Ok(response.text),
            Err(e) => {
                let classified = CompletionError::from(e);
                tracing::warn!(error = %classified, "Completion failed");
                Err(classified)
            }
        }
    }

    /// Preamble, then history in order, then the new user text
    fn build_request(&self, user_text: &str) -> LlmRequest {
        let mut messages = Vec::with_capacity(self.messages.len() + 2);
        messages.push(LlmMessage::system(self.preamble.clone()));
        messages.extend(self.messages.iter().map(Message::to_llm_message));
        messages.push(LlmMessage::user(user_text));

        LlmRequest {
            model: self.params.model.clone(),
            messages,
            max_tokens: Some(self.params.max_tokens),
            temperature: Some(self.params.temperature),
        }
    }

    /// Record the user text, request a completion, and record the response.
    ///
    /// The user message is recorded before the request, so the payload
    /// carries it both as the last history entry and as the new text.
    /// An assistant message is always recorded; on failure it carries the
    /// failure text.
    pub async fn process_turn(&mut self, user_text: &str) -> Turn {
        let user_message = self.add_user_message(user_text);

        let result = self.request_completion(user_text).await;
        let outcome = CompletionOutcome::from(result);
        let assistant_message = self.add_assistant_message(&outcome.text);

        tracing::debug!(
            success = outcome.success,
            history_len = self.messages.len(),
            "Turn processed"
        );

        Turn {
            user_message,
            assistant_message,
            success: outcome.success,
        }
    }

    /// Snapshot of the history
    pub fn messages(&self) -> Vec<Message> {
        self.messages.clone()
    }

    #[allow(dead_code)] // API completeness
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Drop the history; preamble and credential are kept
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn export_transcript(&self) -> String {
        transcript::render(&self.messages)
    }

    pub fn stats(&self) -> ConversationStats {
        let user = self.count_role(MessageRole::User);
        let assistant = self.count_role(MessageRole::Assistant);
        ConversationStats {
            total: user + assistant,
            user,
            assistant,
        }
    }

    fn count_role(&self, role: MessageRole) -> usize {
        self.messages.iter().filter(|m| m.role() == role).count()
    }
}
