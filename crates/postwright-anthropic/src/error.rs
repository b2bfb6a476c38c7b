use std::time::Duration;

use postwright_core::error::PostwrightError;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum AnthropicError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API key contains characters that are not valid in a header")]
    InvalidApiKey,

    #[error("Anthropic returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Anthropic format error: {0}")]
    Format(String),
}

impl From<AnthropicError> for PostwrightError {
    fn from(value: AnthropicError) -> Self {
        match value {
            AnthropicError::Http(err) => PostwrightError::Network(Box::new(err)),
            AnthropicError::Timeout(after) => PostwrightError::Timeout { after },
            AnthropicError::Serde(err) => PostwrightError::Serialization(err),
            AnthropicError::InvalidApiKey => PostwrightError::InvalidRequest(
                "API key contains characters that are not valid in a header".into(),
            ),
            AnthropicError::Api { status, body } => PostwrightError::Api {
                status: status.as_u16(),
                body,
            },
            AnthropicError::Format(msg) => PostwrightError::MalformedResponse(msg),
        }
    }
}
