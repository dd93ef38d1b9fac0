use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::client::ClientError;
use crate::core::constants::ERROR_APOLOGY;
use crate::core::message::Message;

/// Lifecycle of the single completion request a conversation may have
/// outstanding. Every submission path leaves `Pending` again — success,
/// upstream failure, or transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    Idle,
    Pending,
    Resolved,
    Failed,
}

impl RequestPhase {
    pub fn is_in_flight(self) -> bool {
        self == RequestPhase::Pending
    }
}

/// What `submit` did with the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// An assistant reply was appended.
    Completed,
    /// The apology message was appended; detail went to the log.
    Failed,
    /// Empty or whitespace-only prompt; nothing happened.
    IgnoredEmpty,
    /// A request was already in flight; nothing happened.
    IgnoredInFlight,
}

/// Seam between conversation state and whatever produces completions, so
/// tests can drive submissions against a fake gateway.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send the full log and return the assistant reply text.
    async fn complete(&self, log: &[Message]) -> Result<String, ClientError>;
}

struct ConversationState {
    log: Vec<Message>,
    phase: RequestPhase,
}

/// Client-side conversation: an append-only message log plus the request
/// lifecycle guarding it. Submission is serialized — at most one completion
/// request is outstanding at a time.
pub struct Conversation<G> {
    gateway: G,
    state: Mutex<ConversationState>,
}

impl<G: CompletionGateway> Conversation<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: Mutex::new(ConversationState {
                log: Vec::new(),
                phase: RequestPhase::Idle,
            }),
        }
    }

    /// Append a message to the end of the log. Messages are never reordered,
    /// updated, or removed.
    pub fn append(&self, message: Message) {
        self.state.lock().unwrap().log.push(message);
    }

    /// Snapshot of the log in insertion order.
    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn phase(&self) -> RequestPhase {
        self.state.lock().unwrap().phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase().is_in_flight()
    }

    /// Append the prompt as a user message and send the whole log to the
    /// gateway. No-op while a request is in flight or when the prompt is
    /// empty. On any failure the transcript gains a fixed apology instead of
    /// the raw error.
    pub async fn submit(&self, prompt: &str) -> SubmitOutcome {
        if prompt.trim().is_empty() {
            return SubmitOutcome::IgnoredEmpty;
        }

        let outgoing = {
            let mut state = self.state.lock().unwrap();
            if state.phase.is_in_flight() {
                return SubmitOutcome::IgnoredInFlight;
            }
            state.log.push(Message::user(prompt));
            state.phase = RequestPhase::Pending;
            state.log.clone()
        };

        let result = self.gateway.complete(&outgoing).await;

        let mut state = self.state.lock().unwrap();
        match result {
            Ok(content) => {
                state.log.push(Message::assistant(content));
                state.phase = RequestPhase::Resolved;
                SubmitOutcome::Completed
            }
            Err(err) => {
                tracing::error!(error = %err, "completion request failed");
                state.log.push(Message::assistant(ERROR_APOLOGY));
                state.phase = RequestPhase::Failed;
                SubmitOutcome::Failed
            }
        }
    }
}
