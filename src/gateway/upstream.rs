use serde_json::Value;

use crate::api::{ChatMessage, CompletionRequest};
use crate::core::config::GatewayConfig;
use crate::core::constants::UPSTREAM_BODY_FALLBACK;
use crate::gateway::error::GatewayError;

/// Issue one non-streaming completion request and validate the shape of the
/// reply. Returns the full upstream JSON body so the handler can pass it
/// through unchanged.
pub(super) async fn forward_completion(
    client: &reqwest::Client,
    config: &GatewayConfig,
    api_key: &str,
    messages: Vec<ChatMessage>,
) -> Result<Value, GatewayError> {
    let request = CompletionRequest {
        messages,
        model: config.model.clone(),
        stream: false,
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    };

    let response = client
        .post(&config.endpoint)
        .header("Content-Type", "application/json")
        .header("x-api-key", api_key)
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| UPSTREAM_BODY_FALLBACK.to_string());
        tracing::error!(%status, "upstream API returned an error");
        return Err(GatewayError::Upstream { status, body });
    }

    let body: Value = response
        .json()
        .await
        .map_err(|err| GatewayError::UpstreamFormat(err.to_string()))?;

    match body.get("choices").and_then(Value::as_array) {
        Some(choices) if !choices.is_empty() => Ok(body),
        _ => {
            tracing::error!("upstream response is missing a choices array");
            Err(GatewayError::UpstreamFormat(
                "missing or empty choices array".into(),
            ))
        }
    }
}
