use std::env;

use crate::core::constants::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

/// Process-wide gateway configuration, resolved once at startup and injected
/// into the request handlers. Never read ad hoc from the environment and
/// never mutated at runtime.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Upstream chat-completion endpoint.
    pub endpoint: String,
    /// Upstream credential. Absence is surfaced per request, before any
    /// network call is attempted.
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GatewayConfig {
    /// Read `XAI_ENDPOINT` and `XAI_APIKEY` from the environment.
    pub fn from_env() -> Self {
        Self::resolve(env::var("XAI_ENDPOINT").ok(), env::var("XAI_APIKEY").ok())
    }

    /// Build a configuration from raw environment values. Empty strings are
    /// treated as unset.
    pub fn resolve(endpoint: Option<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_key: api_key.filter(|s| !s.is_empty()),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_endpoint_falls_back_to_default() {
        let config = GatewayConfig::resolve(None, Some("key".into()));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.api_key.as_deref(), Some("key"));
    }

    #[test]
    fn empty_strings_are_treated_as_unset() {
        let config = GatewayConfig::resolve(Some(String::new()), Some(String::new()));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn custom_endpoint_and_model_are_kept() {
        let config = GatewayConfig::resolve(Some("http://localhost:9999/v1".into()), None)
            .with_model("grok-3");
        assert_eq!(config.endpoint, "http://localhost:9999/v1");
        assert_eq!(config.model, "grok-3");
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    }
}
