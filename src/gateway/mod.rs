//! The proxy gateway: accepts a conversation log, validates it, injects the
//! default system directive when absent, and forwards the log to the
//! upstream completion API.
//!
//! The handler is stateless — shared state is read-only configuration plus a
//! cloned HTTP client — so it is safe under arbitrary concurrent invocation.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tower_http::cors::CorsLayer;

use crate::api::ChatMessage;
use crate::core::config::GatewayConfig;
use crate::core::constants::DEFAULT_SYSTEM_PROMPT;

mod error;
mod upstream;

pub use error::GatewayError;

/// Shared state for the gateway HTTP server.
pub struct GatewayState {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl GatewayState {
    pub fn new(config: GatewayConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }
}

/// Build the gateway router: `POST /api/chat`.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/chat", post(handle_chat))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Prepend the default system directive unless the log already carries a
/// system message. Always returns a fresh copy; the caller's log is never
/// mutated.
pub fn ensure_system_message(log: &[ChatMessage]) -> Vec<ChatMessage> {
    if log.iter().any(|msg| msg.role == "system") {
        return log.to_vec();
    }
    let mut out = Vec::with_capacity(log.len() + 1);
    out.push(ChatMessage::new("system", DEFAULT_SYSTEM_PROMPT));
    out.extend_from_slice(log);
    out
}

async fn handle_chat(
    State(state): State<Arc<GatewayState>>,
    body: Bytes,
) -> Result<Json<Value>, GatewayError> {
    // Credential check comes first: fail before parsing or any network call.
    let api_key = state.config.api_key.as_deref().ok_or_else(|| {
        tracing::warn!("rejecting request: upstream credential is not configured");
        GatewayError::Configuration
    })?;

    let log: Vec<ChatMessage> = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejecting request: body is not a message array");
        GatewayError::InvalidInput(err.to_string())
    })?;

    let outgoing = ensure_system_message(&log);
    tracing::info!(count = outgoing.len(), "forwarding message log upstream");

    let completion =
        upstream::forward_completion(&state.client, &state.config, api_key, outgoing).await?;
    tracing::info!("received completion from upstream API");

    Ok(Json(completion))
}
