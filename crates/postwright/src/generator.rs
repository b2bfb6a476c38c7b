//! The submission pipeline: validate, optional image, one post per platform.
use futures_util::future::join_all;
use postwright_core::{
    ApiKey, EventInput, Outcome, PlatformCatalog, PlatformSpec, ProviderId, Result, Tone,
    ValidationError,
};
use postwright_types::{EventImagePrompt, EventPostPrompt, GenerationResult};
use serde::Serialize;

use crate::{adapter::ProviderAdapter, config::GeneratorConfig, registry::ProviderRegistry};

/// Everything the user entered for one generation run.
#[derive(Debug, Clone)]
pub struct Submission {
    pub event: EventInput,
    pub provider: ProviderId,
    pub tone: Tone,
    pub generate_image: bool,
    pub api_key: ApiKey,
}

impl Submission {
    pub fn new(event: EventInput, provider: ProviderId, api_key: ApiKey) -> Self {
        Self {
            event,
            provider,
            tone: Tone::default(),
            generate_image: false,
            api_key,
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_image(mut self, generate_image: bool) -> Self {
        self.generate_image = generate_image;
        self
    }

    /// Event fields first, then the key.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.event.validate()?;
        if self.api_key.is_blank() {
            return Err(ValidationError::MissingApiKey);
        }
        Ok(())
    }
}

/// What the presentation layer renders for one submission.
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub provider: ProviderId,
    pub tone: Tone,
    /// `None` when no image was requested or the provider cannot render one.
    pub image: Option<Outcome<String>>,
    /// One entry per platform, in catalog order.
    pub results: Vec<GenerationResult>,
}

impl SubmissionReport {
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref()?.as_deref().ok()
    }

    pub fn result(&self, platform: &str) -> Option<&GenerationResult> {
        self.results.iter().find(|result| result.platform == platform)
    }
}

pub struct EventPostGenerator {
    adapter: ProviderAdapter,
    catalog: PlatformCatalog,
    concurrent_platforms: bool,
}

impl EventPostGenerator {
    pub fn new(adapter: ProviderAdapter, catalog: PlatformCatalog) -> Self {
        Self {
            adapter,
            catalog,
            concurrent_platforms: false,
        }
    }

    /// Generator over the built-in providers, configured by `config`.
    ///
    /// # Errors
    ///
    /// * [`PostwrightError::Backend`](postwright_core::PostwrightError::Backend)
    ///   – an HTTP client could not be built.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        let registry = ProviderRegistry::with_defaults(config)?;
        let adapter = ProviderAdapter::new(registry, config.request_timeout());

        Ok(Self::new(adapter, config.platforms.clone())
            .with_concurrent_platforms(config.concurrent_platforms))
    }

    pub fn with_concurrent_platforms(mut self, concurrent: bool) -> Self {
        self.concurrent_platforms = concurrent;
        self
    }

    pub fn catalog(&self) -> &PlatformCatalog {
        &self.catalog
    }

    pub fn adapter(&self) -> &ProviderAdapter {
        &self.adapter
    }

    /// Run one submission.
    ///
    /// The image, if requested, is generated before any post. Provider
    /// failures are carried inside the report; they never abort the run.
    ///
    /// # Errors
    ///
    /// * [`ValidationError`] – raised before any provider is contacted.
    pub async fn generate(
        &self,
        submission: &Submission,
    ) -> std::result::Result<SubmissionReport, ValidationError> {
        submission.validate()?;

        let provider = submission.provider;
        tracing::info!(
            %provider,
            tone = %submission.tone,
            platforms = self.catalog.len(),
            image = submission.generate_image,
            "generating posts"
        );

        let image = if !submission.generate_image {
            None
        } else if self.adapter.supports_image(provider) {
            let prompt = EventImagePrompt::for_event(&submission.event).render();
            Some(
                self.adapter
                    .generate_image(provider, &submission.api_key, &prompt)
                    .await,
            )
        } else {
            tracing::warn!(
                %provider,
                "image requested but provider cannot render images; skipping"
            );
            None
        };

        let image_url = image
            .as_ref()
            .and_then(|outcome| outcome.as_ref().ok())
            .cloned();

        let results = if self.concurrent_platforms {
            join_all(
                self.catalog
                    .iter()
                    .map(|platform| self.generate_post(submission, platform, image_url.clone())),
            )
            .await
        } else {
            let mut results = Vec::with_capacity(self.catalog.len());
            for platform in &self.catalog {
                results.push(
                    self.generate_post(submission, platform, image_url.clone())
                        .await,
                );
            }
            results
        };

        tracing::info!(
            %provider,
            failed = results.iter().filter(|r| r.failure().is_some()).count(),
            "generation finished"
        );

        Ok(SubmissionReport {
            provider,
            tone: submission.tone,
            image,
            results,
        })
    }

    async fn generate_post(
        &self,
        submission: &Submission,
        platform: &PlatformSpec,
        image_url: Option<String>,
    ) -> GenerationResult {
        let prompt = EventPostPrompt::for_spec(platform, &submission.event, submission.tone);
        let outcome = self
            .adapter
            .generate_prompt(submission.provider, &submission.api_key, prompt)
            .await;

        let result = GenerationResult::new(platform, outcome, image_url);
        if let Some(length) = result.length {
            tracing::debug!(
                platform = %platform.name,
                count = length.count,
                limit = length.limit,
                within_limit = length.within_limit,
                "post generated"
            );
        }
        result
    }
}

/// Serializable view of a [`SubmissionReport`], used for `--json` output.
#[derive(Debug, Serialize)]
pub struct ReportView<'a> {
    pub provider: ProviderId,
    pub tone: Tone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ArtifactView<'a>>,
    pub posts: Vec<PostView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum ArtifactView<'a> {
    Ok { value: &'a str },
    Error {
        error: &'a postwright_core::ProviderFailure,
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct PostView<'a> {
    pub platform: &'a str,
    #[serde(flatten)]
    pub content: ArtifactView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub within_limit: Option<bool>,
    pub copyable: bool,
}

impl<'a> ArtifactView<'a> {
    fn new(outcome: &'a Outcome<String>) -> Self {
        match outcome {
            Ok(value) => ArtifactView::Ok { value },
            Err(error) => ArtifactView::Error {
                error,
                message: error.to_string(),
            },
        }
    }
}

impl<'a> From<&'a SubmissionReport> for ReportView<'a> {
    fn from(report: &'a SubmissionReport) -> Self {
        Self {
            provider: report.provider,
            tone: report.tone,
            image: report.image.as_ref().map(ArtifactView::new),
            posts: report
                .results
                .iter()
                .map(|result| PostView {
                    platform: &result.platform,
                    content: ArtifactView::new(&result.outcome),
                    character_count: result.length.map(|l| l.count),
                    limit: result.length.map(|l| l.limit),
                    within_limit: result.length.map(|l| l.within_limit),
                    copyable: result.is_copyable(),
                })
                .collect(),
        }
    }
}
