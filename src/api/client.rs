use async_trait::async_trait;

use crate::api::CompletionResponse;
use crate::core::conversation::CompletionGateway;
use crate::core::message::Message;

/// Failures the conversation client can hit talking to the gateway. All of
/// them collapse into the same user-visible apology; the distinction exists
/// for logging only.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request to gateway failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gateway responded with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed completion body: {0}")]
    MalformedResponse(String),
}

/// HTTP client for the proxy gateway. Posts the full conversation log and
/// extracts the first choice of the completion.
pub struct HttpCompletionGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpCompletionGateway {
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl CompletionGateway for HttpCompletionGateway {
    async fn complete(&self, log: &[Message]) -> Result<String, ClientError> {
        let response = self.client.post(&self.url).json(&log).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Status { status, body });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ClientError::MalformedResponse("response contained no choices".into()))
    }
}
