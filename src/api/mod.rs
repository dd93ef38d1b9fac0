use serde::{Deserialize, Serialize};

/// Wire form of one log entry. The gateway forwards the `{role, content}`
/// projection of each entry; roles are plain strings so unusual values pass
/// through untouched, while unknown per-message fields are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Body of the non-streaming POST the gateway issues upstream. Built fresh
/// per request; never mutates the caller's log.
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub stream: bool,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The slice of the upstream response the client consumes. Everything beyond
/// `choices[0].message.content` is opaque provider metadata and ignored.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: ChatMessage,
}

pub mod client;
