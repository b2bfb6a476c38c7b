//! Single entry point for provider calls.
//!
//! [`ProviderAdapter`] resolves the backend from the [`ProviderRegistry`],
//! pins the request parameters, bounds the call with a timeout and folds
//! every error into a [`ProviderFailure`]. Nothing it returns is an `Err` of
//! the crate error type: callers always get an [`Outcome`].
use std::{
    future::Future,
    time::{Duration, Instant},
};

use postwright_core::{
    ApiKey, FailureKind, Outcome, PostwrightError, ProviderFailure, ProviderId, Result,
    generic::GenericMessage,
    provider::{ImageGenerationParameters, TextGenerationParameters},
    template::IntoPrompt,
};

use crate::registry::ProviderRegistry;

pub struct ProviderAdapter {
    registry: ProviderRegistry,
    timeout: Duration,
}

impl ProviderAdapter {
    pub fn new(registry: ProviderRegistry, timeout: Duration) -> Self {
        Self { registry, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn supports_image(&self, provider: ProviderId) -> bool {
        self.registry.supports_image(provider)
    }

    /// Send `prompt` as a single user message to the provider's pinned text
    /// model (500 max tokens, temperature 0.7).
    pub async fn generate_text(
        &self,
        provider: ProviderId,
        api_key: &ApiKey,
        prompt: &str,
    ) -> Outcome<String> {
        self.generate_prompt(provider, api_key, GenericMessage::user(prompt))
            .await
    }

    /// Like [`generate_text`](Self::generate_text), for any prompt value.
    pub async fn generate_prompt<P>(
        &self,
        provider: ProviderId,
        api_key: &ApiKey,
        prompt: P,
    ) -> Outcome<String>
    where
        P: IntoPrompt<Message = GenericMessage>,
    {
        let messages = prompt.into_prompt();
        let prompt_chars: usize = messages.iter().map(|m| m.content.chars().count()).sum();
        tracing::debug!(%provider, prompt_chars, "generating text");

        let outcome = self
            .bounded(provider, async {
                let backend = self.registry.text(provider)?;
                let params = TextGenerationParameters::new(messages, provider.text_model());
                backend
                    .generate_text(api_key, params)
                    .await
                    .map(|generated| generated.text)
            })
            .await;

        log_outcome(provider, "text", &outcome);
        outcome
    }

    /// Render one 1024x1024 standard-quality image and return its URL.
    ///
    /// Providers without image capability yield a failure of kind
    /// [`FailureKind::Unsupported`] without any network traffic.
    pub async fn generate_image(
        &self,
        provider: ProviderId,
        api_key: &ApiKey,
        prompt: &str,
    ) -> Outcome<String> {
        tracing::debug!(%provider, "generating image");

        let outcome = self
            .bounded(provider, async {
                let backend = self.registry.image(provider)?;
                let model = provider
                    .image_model()
                    .ok_or(PostwrightError::ImageNotSupported { provider })?;
                backend
                    .generate_image(api_key, ImageGenerationParameters::new(prompt, model))
                    .await
                    .map(|generated| generated.url)
            })
            .await;

        log_outcome(provider, "image", &outcome);
        outcome
    }

    async fn bounded<F>(&self, provider: ProviderId, call: F) -> Outcome<String>
    where
        F: Future<Output = Result<String>>,
    {
        let started = Instant::now();
        let result = tokio::time::timeout(self.timeout, call).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(%provider, elapsed_ms, "provider call finished");

        match result {
            Ok(Ok(artifact)) => Ok(artifact),
            Ok(Err(err)) => Err(ProviderFailure::from_error(provider, &err)),
            Err(_elapsed) => Err(ProviderFailure::from_error(
                provider,
                &PostwrightError::Timeout {
                    after: self.timeout,
                },
            )),
        }
    }
}

fn log_outcome(provider: ProviderId, artifact: &str, outcome: &Outcome<String>) {
    if let Err(failure) = outcome {
        match failure.kind {
            FailureKind::Unsupported => {
                tracing::info!(%provider, artifact, "capability not available")
            }
            kind => tracing::warn!(
                %provider,
                artifact,
                ?kind,
                message = %failure.message,
                "provider call failed"
            ),
        }
    }
}
