use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Every way a proxied completion can fail. Each variant is caught at the
/// handler boundary and converted to a structured JSON response; none
/// propagate as raw panics or stack traces.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The upstream credential is missing from configuration. Detected
    /// before any network call.
    #[error("XAI_APIKEY is not defined in environment variables")]
    Configuration,

    /// The request body was not a JSON array of `{role, content}` entries.
    #[error("Message log is missing or not an array: {0}")]
    InvalidInput(String),

    /// The upstream API answered with a non-success status. Relayed to the
    /// caller with the same status code.
    #[error("Upstream API error: {status}")]
    Upstream { status: StatusCode, body: String },

    /// The upstream body parsed but carried no usable choices.
    #[error("Invalid response format from upstream API")]
    UpstreamFormat(String),

    /// Anything else — transport failures, body-read failures.
    #[error("Failed to process request: {0}")]
    Internal(String),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream { status, .. } => *status,
            GatewayError::UpstreamFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Internal(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            GatewayError::Upstream { body, .. } => json!({
                "error": self.to_string(),
                "details": body,
            }),
            GatewayError::Internal(message) => json!({
                "error": "Failed to process request",
                "message": message,
            }),
            GatewayError::UpstreamFormat(detail) => json!({
                "error": self.to_string(),
                "details": detail,
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            GatewayError::Configuration.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            GatewayError::InvalidInput("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::Upstream {
                status: StatusCode::TOO_MANY_REQUESTS,
                body: "slow down".into(),
            }
            .status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            GatewayError::UpstreamFormat("no choices".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn upstream_errors_carry_the_body_as_details() {
        let err = GatewayError::Upstream {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "overloaded".into(),
        };
        assert!(err.to_string().contains("503"));
    }
}
