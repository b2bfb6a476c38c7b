use std::{sync::Arc, time::Duration};

use postwright_core::error::{PostwrightError, Result};

use crate::client::{DEFAULT_TIMEOUT, OpenAiClient};

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value that
/// implements both
/// [`TextGenerationProvider`](postwright_core::provider::TextGenerationProvider)
/// and [`ImageGenerationProvider`](postwright_core::provider::ImageGenerationProvider).
///
/// The adapter owns a shareable, connection-pooled `reqwest::Client` but no
/// credential: the key travels with each call.
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl OpenAiAdapter {
    /// Adapter with default base URL and timeout.
    pub fn new() -> Result<Self> {
        OpenAiAdapterBuilder::new().build()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use std::time::Duration;
/// use postwright_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new()
///     .with_timeout(Duration::from_secs(30))
///     .build()
///     .expect("TLS backend available");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the adapter at a compatible gateway or a local mock.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Upper bound for a single HTTP request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`PostwrightError::Backend`](postwright_core::PostwrightError::Backend)
    ///   – the HTTP client could not be constructed.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PostwrightError::Backend(Box::new(err)))?;

        Ok(OpenAiAdapter {
            client: Arc::new(OpenAiClient::with_http(http, self.base_url, timeout)),
        })
    }
}
