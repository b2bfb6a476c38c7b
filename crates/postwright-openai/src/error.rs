use std::time::Duration;

use postwright_core::error::PostwrightError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("API key contains characters that are not valid in a header")]
    InvalidApiKey,

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("OpenAI format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for PostwrightError {
    fn from(value: OpenAiError) -> Self {
        match value {
            OpenAiError::Http(err) => PostwrightError::Network(Box::new(err)),
            OpenAiError::Timeout(after) => PostwrightError::Timeout { after },
            OpenAiError::Serde(err) => PostwrightError::Serialization(err),
            OpenAiError::InvalidApiKey => PostwrightError::InvalidRequest(
                "API key contains characters that are not valid in a header".into(),
            ),
            OpenAiError::Api { status, body } => PostwrightError::Api {
                status: status.as_u16(),
                body,
            },
            OpenAiError::Format(msg) => PostwrightError::MalformedResponse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postwright_core::FailureKind;

    #[test]
    fn api_errors_keep_status_for_classification() {
        let err: PostwrightError = OpenAiError::Api {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: "Rate limit reached".into(),
        }
        .into();
        assert_eq!(err.failure_kind(), FailureKind::RateLimited);
        assert!(err.to_string().contains("Rate limit reached"));
    }

    #[test]
    fn format_errors_are_malformed_responses() {
        let err: PostwrightError = OpenAiError::Format("response has no choices".into()).into();
        assert_eq!(err.failure_kind(), FailureKind::MalformedResponse);
    }

    #[test]
    fn http_errors_are_network_failures() {
        let http = reqwest::Client::new()
            .get("http://[::1/missing-bracket")
            .build()
            .unwrap_err();
        let err: PostwrightError = OpenAiError::Http(http).into();
        assert_eq!(err.failure_kind(), FailureKind::Network);
    }
}
