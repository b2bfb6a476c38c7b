//! Unified error type exposed by **`postwright-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up. The adapter facade in the umbrella crate then
//! folds every variant into a [`ProviderFailure`](crate::outcome::ProviderFailure),
//! so callers of the high-level API only ever see errors as values.

use std::time::Duration;

use thiserror::Error;

use crate::model::ProviderId;
use crate::outcome::FailureKind;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PostwrightError>;

#[derive(Debug, Error)]
pub enum PostwrightError {
    /// A prompt or length check referenced a platform that is not part of the
    /// active [`PlatformCatalog`](crate::platform::PlatformCatalog).
    #[error("unknown platform `{name}`")]
    UnknownPlatform { name: String },

    /// No backend has been registered for `provider`.
    #[error("backend for provider `{provider}` is not configured")]
    ProviderNotConfigured { provider: ProviderId },

    /// The provider is registered but cannot generate images.
    #[error("provider `{provider}` does not support image generation")]
    ImageNotSupported { provider: ProviderId },

    /// The selected backend does not recognise the requested `model`.
    #[error("provider `{provider}` does not support model `{model}`")]
    ModelNotSupported {
        provider: &'static str,
        model: String,
    },

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The provider answered successfully but the payload lacks the artifact
    /// we asked for (no choices, no candidates, empty image list …).
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The call did not complete within the configured bound.
    #[error("request timed out after {}s", .after.as_secs())]
    Timeout { after: Duration },

    /// Transport-level failure (DNS, TLS, connection reset …).
    #[error("network error: {0}")]
    Network(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Generic forwarding of any backend-specific error that doesn’t fit
    /// another category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),
}

impl PostwrightError {
    /// Coarse classification used when the error is turned into a
    /// [`ProviderFailure`](crate::outcome::ProviderFailure).
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            PostwrightError::Api { status, .. } => match status {
                401 | 403 => FailureKind::Authentication,
                429 => FailureKind::RateLimited,
                _ => FailureKind::Api,
            },
            PostwrightError::Timeout { .. } => FailureKind::Timeout,
            PostwrightError::Network(_) => FailureKind::Network,
            PostwrightError::Serialization(_) | PostwrightError::MalformedResponse(_) => {
                FailureKind::MalformedResponse
            }
            PostwrightError::ImageNotSupported { .. }
            | PostwrightError::ProviderNotConfigured { .. }
            | PostwrightError::ModelNotSupported { .. } => FailureKind::Unsupported,
            PostwrightError::UnknownPlatform { .. }
            | PostwrightError::InvalidRequest(_)
            | PostwrightError::Invalid(_) => FailureKind::InvalidRequest,
            PostwrightError::Backend(_) => FailureKind::Api,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_failure_kinds() {
        let kind = |status| {
            PostwrightError::Api {
                status,
                body: String::new(),
            }
            .failure_kind()
        };

        assert_eq!(kind(401), FailureKind::Authentication);
        assert_eq!(kind(403), FailureKind::Authentication);
        assert_eq!(kind(429), FailureKind::RateLimited);
        assert_eq!(kind(500), FailureKind::Api);
    }

    #[test]
    fn timeout_message_mentions_seconds() {
        let err = PostwrightError::Timeout {
            after: Duration::from_secs(45),
        };
        assert_eq!(err.to_string(), "request timed out after 45s");
        assert_eq!(err.failure_kind(), FailureKind::Timeout);
    }
}
