use std::time::Duration;

use postwright_core::error::PostwrightError;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API key contains characters that are not valid in a header")]
    InvalidApiKey,

    #[error("Gemini returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Gemini format error: {0}")]
    Format(String),
}

impl From<GeminiError> for PostwrightError {
    fn from(value: GeminiError) -> Self {
        match value {
            GeminiError::Http(err) => PostwrightError::Network(Box::new(err)),
            GeminiError::Timeout(after) => PostwrightError::Timeout { after },
            GeminiError::Serde(err) => PostwrightError::Serialization(err),
            GeminiError::InvalidApiKey => PostwrightError::InvalidRequest(
                "API key contains characters that are not valid in a header".into(),
            ),
            GeminiError::Api { status, body } => PostwrightError::Api {
                status: status.as_u16(),
                body,
            },
            GeminiError::Format(msg) => PostwrightError::MalformedResponse(msg),
        }
    }
}
