use std::{sync::Arc, time::Duration};

use postwright_core::error::{PostwrightError, Result};

use crate::client::{DEFAULT_TIMEOUT, GeminiClient};

/// Wires [`GeminiClient`] into a
/// [`TextGenerationProvider`](postwright_core::provider::TextGenerationProvider).
pub struct GeminiAdapter {
    pub(crate) client: Arc<GeminiClient>,
}

impl GeminiAdapter {
    pub fn new() -> Result<Self> {
        GeminiAdapterBuilder::new().build()
    }
}

/// Builder for [`GeminiAdapter`].
#[derive(Default)]
pub struct GeminiAdapterBuilder {
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl GeminiAdapterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<GeminiAdapter> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PostwrightError::Backend(Box::new(err)))?;

        Ok(GeminiAdapter {
            client: Arc::new(GeminiClient::with_http(http, self.base_url, timeout)),
        })
    }
}
