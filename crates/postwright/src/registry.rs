//! Lookup table from [`ProviderId`] to the backends that serve it.
use std::{collections::HashMap, sync::Arc};

use postwright_anthropic::AnthropicAdapterBuilder;
use postwright_core::{
    PostwrightError, ProviderId, Result,
    provider::{ImageGenerationProvider, TextGenerationProvider},
};
use postwright_gemini::GeminiAdapterBuilder;
use postwright_openai::OpenAiAdapterBuilder;

use crate::config::GeneratorConfig;

/// Text backends are mandatory per provider, image backends optional.
#[derive(Default, Clone)]
pub struct ProviderRegistry {
    text: HashMap<ProviderId, Arc<dyn TextGenerationProvider>>,
    image: HashMap<ProviderId, Arc<dyn ImageGenerationProvider>>,
}

impl ProviderRegistry {
    /// Empty registry; register backends with [`with_text`](Self::with_text)
    /// and [`with_image`](Self::with_image).
    pub fn new() -> Self {
        Self::default()
    }

    /// OpenAI (text + image), Claude and Gemini, with the timeout and base URL
    /// overrides from `config`.
    ///
    /// # Errors
    ///
    /// * [`PostwrightError::Backend`] – an HTTP client could not be built.
    pub fn with_defaults(config: &GeneratorConfig) -> Result<Self> {
        let timeout = config.request_timeout();

        let mut openai = OpenAiAdapterBuilder::new().with_timeout(timeout);
        if let Some(url) = &config.endpoints.openai {
            openai = openai.with_base_url(url.clone());
        }
        let openai = Arc::new(openai.build()?);

        let mut claude = AnthropicAdapterBuilder::new().with_timeout(timeout);
        if let Some(url) = &config.endpoints.claude {
            claude = claude.with_base_url(url.clone());
        }

        let mut gemini = GeminiAdapterBuilder::new().with_timeout(timeout);
        if let Some(url) = &config.endpoints.gemini {
            gemini = gemini.with_base_url(url.clone());
        }

        Ok(Self::new()
            .with_text(openai.clone())
            .with_image(openai)
            .with_text(Arc::new(claude.build()?))
            .with_text(Arc::new(gemini.build()?)))
    }

    /// Register (or replace) the text backend for the provider it reports.
    pub fn with_text(mut self, provider: Arc<dyn TextGenerationProvider>) -> Self {
        self.text.insert(provider.provider_id(), provider);
        self
    }

    /// Register (or replace) the image backend for the provider it reports.
    pub fn with_image(mut self, provider: Arc<dyn ImageGenerationProvider>) -> Self {
        self.image.insert(provider.provider_id(), provider);
        self
    }

    pub fn text(&self, provider: ProviderId) -> Result<&dyn TextGenerationProvider> {
        self.text
            .get(&provider)
            .map(Arc::as_ref)
            .ok_or(PostwrightError::ProviderNotConfigured { provider })
    }

    pub fn image(&self, provider: ProviderId) -> Result<&dyn ImageGenerationProvider> {
        self.image
            .get(&provider)
            .map(Arc::as_ref)
            .ok_or(PostwrightError::ImageNotSupported { provider })
    }

    pub fn supports_image(&self, provider: ProviderId) -> bool {
        self.image.contains_key(&provider)
    }
}
