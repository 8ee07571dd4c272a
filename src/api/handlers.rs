//! HTTP request handlers

use super::session::SessionHandle;
use super::types::{
    ChatRequest, CredentialRequest, CredentialResponse, ErrorResponse, MessagesResponse,
    SessionInfoResponse, SessionResponse, SetActiveRequest, SuccessResponse,
};
use super::AppState;
use crate::chat::{CompletionError, ConversationStats, Turn};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Session lifecycle
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        // Configuration
        .route("/api/sessions/:id/credential", post(set_credential))
        .route("/api/sessions/:id/active", post(set_active))
        // Conversation
        .route("/api/sessions/:id/chat", post(send_chat))
        .route("/api/sessions/:id/messages", get(get_messages))
        .route("/api/sessions/:id/clear", post(clear_conversation))
        .route("/api/sessions/:id/stats", get(get_stats))
        .route("/api/sessions/:id/export", get(export_transcript))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

async fn lookup(state: &AppState, id: &str) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))
}

fn no_active_service() -> AppError {
    AppError::NotFound("No active chat service available".to_string())
}

// ============================================================
// Sessions
// ============================================================

async fn create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let (session_id, handle) = state.sessions.create().await;
    let registry = handle.lock().await;

    Json(SessionResponse {
        session_id,
        services: registry.list_names(),
        active: registry.active_name().map(str::to_string),
    })
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionInfoResponse>, AppError> {
    let handle = lookup(&state, &id).await?;
    let registry = handle.lock().await;
    let active = registry.get_active();

    Ok(Json(SessionInfoResponse {
        services: registry.list_names(),
        active: registry.active_name().map(str::to_string),
        has_valid_credential: active.is_some_and(|m| m.has_valid_credential()),
        stats: active.map(|m| m.stats()).unwrap_or_default(),
    }))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    if !state.sessions.remove(&id).await {
        return Err(AppError::NotFound(format!("Session not found: {id}")));
    }
    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================
// Configuration
// ============================================================

async fn set_credential(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CredentialRequest>,
) -> Result<Json<CredentialResponse>, AppError> {
    let handle = lookup(&state, &id).await?;
    let mut registry = handle.lock().await;

    // The key applies to every service in the session
    registry.set_credential_all(&req.api_key);

    let has_valid_credential = registry
        .get_active()
        .is_some_and(|m| m.has_valid_credential());
    tracing::info!(session_id = %id, has_valid_credential, "Credential updated");

    Ok(Json(CredentialResponse {
        has_valid_credential,
    }))
}

async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let handle = lookup(&state, &id).await?;
    let mut registry = handle.lock().await;

    if !registry.set_active(&req.name) {
        return Err(AppError::NotFound(format!("Unknown service: {}", req.name)));
    }
    tracing::info!(session_id = %id, service = %req.name, "Active service changed");

    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================
// Conversation
// ============================================================

async fn send_chat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Turn>, AppError> {
    let handle = lookup(&state, &id).await?;
    // Held across the completion call: turns in one session are serialized and
    // reads of that session wait for the turn to finish.
    let mut registry = handle.lock().await;
    let manager = registry.get_active_mut().ok_or_else(no_active_service)?;

    // Only well-formed turns are recorded
    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest(CompletionError::EmptyMessage.to_string()));
    }
    if !manager.has_valid_credential() {
        return Err(AppError::BadRequest(CompletionError::NotConfigured.to_string()));
    }

    let turn = manager.process_turn(&req.text).await;
    Ok(Json(turn))
}

async fn get_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessagesResponse>, AppError> {
    let handle = lookup(&state, &id).await?;
    let registry = handle.lock().await;
    let manager = registry.get_active().ok_or_else(no_active_service)?;

    Ok(Json(MessagesResponse {
        messages: manager.messages(),
    }))
}

async fn clear_conversation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let handle = lookup(&state, &id).await?;
    let mut registry = handle.lock().await;
    registry
        .get_active_mut()
        .ok_or_else(no_active_service)?
        .clear();

    Ok(Json(SuccessResponse { success: true }))
}

async fn get_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ConversationStats>, AppError> {
    let handle = lookup(&state, &id).await?;
    let registry = handle.lock().await;
    let manager = registry.get_active().ok_or_else(no_active_service)?;

    Ok(Json(manager.stats()))
}

async fn export_transcript(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let handle = lookup(&state, &id).await?;
    let registry = handle.lock().await;
    let name = registry.active_name().ok_or_else(no_active_service)?;
    let manager = registry.get_active().ok_or_else(no_active_service)?;

    let disposition = format!("attachment; filename=\"{}\"", export_filename(name));
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        manager.export_transcript(),
    )
        .into_response())
}

/// `chat_export_<service name, lowercase, spaces as underscores>.txt`
fn export_filename(service: &str) -> String {
    let slug: String = service
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| *c != '"')
        .collect();
    format!("chat_export_{slug}.txt")
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("tutor-chat ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
