use std::{sync::Arc, time::Duration};

use postwright_core::error::{PostwrightError, Result};

use crate::client::{AnthropicClient, DEFAULT_TIMEOUT};

/// Wires [`AnthropicClient`] into a
/// [`TextGenerationProvider`](postwright_core::provider::TextGenerationProvider).
pub struct AnthropicAdapter {
    pub(crate) client: Arc<AnthropicClient>,
}

impl AnthropicAdapter {
    pub fn new() -> Result<Self> {
        AnthropicAdapterBuilder::new().build()
    }
}

/// Builder for [`AnthropicAdapter`].
#[derive(Default)]
pub struct AnthropicAdapterBuilder {
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl AnthropicAdapterBuilder {
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

    pub fn build(self) -> Result<AnthropicAdapter> {
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PostwrightError::Backend(Box::new(err)))?;

        Ok(AnthropicAdapter {
            client: Arc::new(AnthropicClient::with_http(http, self.base_url, timeout)),
        })
    }
}
