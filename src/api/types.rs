//! API request and response types

use crate::chat::{ConversationStats, Message};
use serde::{Deserialize, Serialize};

/// Request to set the session's API key
#[derive(Debug, Deserialize)]
pub struct CredentialRequest {
    pub api_key: String,
}

/// Request to switch the active service
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub name: String,
}

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Response for session creation
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub services: Vec<String>,
    pub active: Option<String>,
}

/// Current state of a session's active service
#[derive(Debug, Serialize)]
pub struct SessionInfoResponse {
    pub services: Vec<String>,
    pub active: Option<String>,
    pub has_valid_credential: bool,
    pub stats: ConversationStats,
}

/// Response for credential updates
#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub has_valid_credential: bool,
}

/// Response with the active service's history
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

/// Response for actions without a payload
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
