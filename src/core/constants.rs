//! Shared defaults used across the gateway and the conversation client.

/// Upstream completion endpoint used when `XAI_ENDPOINT` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://api.x.ai/v1/chat/completions";

/// Model identifier sent with every completion request.
pub const DEFAULT_MODEL: &str = "grok-2-latest";

/// System directive prepended to logs that carry no system message.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are Grok, a helpful AI assistant.";

pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Placeholder used when an upstream error body cannot be read.
pub const UPSTREAM_BODY_FALLBACK: &str = "No error details available";

/// Assistant message shown in place of any failed completion. The underlying
/// error goes to the log, never to the transcript.
pub const ERROR_APOLOGY: &str = "Sorry, I encountered an error. Please try again later.";
