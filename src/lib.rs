//! Parley is a minimal chat backend that relays conversation logs to a remote
//! LLM API and renders the replies as sanitized, syntax-highlighted HTML.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation state machine, the gateway configuration,
//!   and the shared message/role types.
//! - [`gateway`] exposes the HTTP proxy endpoint that validates an incoming
//!   message log, injects the default system directive, and forwards the log
//!   to the upstream completion API.
//! - [`api`] defines the chat/completion payloads exchanged with the gateway
//!   and the upstream service, plus the HTTP client used by conversations.
//! - [`render`] converts untrusted message markdown into sanitized HTML with
//!   highlighted fenced code blocks.
//!
//! The runtime entrypoint lives in the binary crate (`src/main.rs`), which
//! reads configuration from the environment and serves [`gateway::router`].

pub mod api;
pub mod core;
pub mod gateway;
pub mod render;
