//! Tutor Chat - conversational front-end for a hosted completion endpoint
//!
//! Keeps per-session conversation history, replays it with a fixed preamble
//! on every request, and exposes the conversation over a small HTTP API.

mod api;
mod chat;
mod llm;
mod system_prompt;

use api::{create_router, AppState};
use llm::{LlmConfig, LlmService, LoggingService, OpenAIService};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutor_chat=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let port: u16 = std::env::var("TUTOR_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let llm_config = LlmConfig::from_env();
    let openai = OpenAIService::new(llm_config.base_url.as_deref())?;
    let llm: Arc<dyn LlmService> = Arc::new(LoggingService::new(Arc::new(openai)));

    tracing::info!(
        model = %llm_config.params.model,
        max_tokens = llm_config.params.max_tokens,
        temperature = llm_config.params.temperature,
        base_url = llm_config.base_url.as_deref().unwrap_or("default"),
        "Completion endpoint configured"
    );
    if llm_config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; sessions start without a credential");
    }

    let state = AppState::new(llm, &llm_config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Tutor chat server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
