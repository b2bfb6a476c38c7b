//! Discriminated result of a single provider call.
//!
//! Provider failures are values, not exceptions: the adapter facade turns
//! every [`PostwrightError`] into a [`ProviderFailure`] so callers branch on
//! the type instead of matching an `"Error"` prefix. `Display` still renders
//! the familiar `Error with <Provider>: <message>` line for presentation.
use serde::Serialize;
use thiserror::Error;

use crate::{error::PostwrightError, model::ProviderId};

/// Result of one provider call.
pub type Outcome<T> = std::result::Result<T, ProviderFailure>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// 401 / 403: bad or missing key.
    Authentication,
    /// 429.
    RateLimited,
    Timeout,
    Network,
    /// Success status but no usable artifact in the body.
    MalformedResponse,
    /// Any other non-success answer.
    Api,
    /// The provider lacks the requested capability.
    Unsupported,
    InvalidRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Error with {provider}: {message}")]
pub struct ProviderFailure {
    pub provider: ProviderId,
    pub kind: FailureKind,
    pub message: String,
}

impl ProviderFailure {
    pub fn new(provider: ProviderId, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            provider,
            kind,
            message: message.into(),
        }
    }

    /// Classify and wrap an error raised while talking to `provider`.
    pub fn from_error(provider: ProviderId, error: &PostwrightError) -> Self {
        Self::new(provider, error.failure_kind(), error.to_string())
    }
}
