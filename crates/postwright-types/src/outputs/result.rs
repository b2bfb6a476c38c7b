use postwright_core::{
    outcome::{Outcome, ProviderFailure},
    platform::{LengthStatus, PlatformSpec},
};

/// Generated post for one platform, plus its length check.
///
/// Built once per platform per submission and never mutated.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub platform: String,
    pub outcome: Outcome<String>,
    /// Present only for successful generations.
    pub length: Option<LengthStatus>,
    /// Shared image for the whole submission, if one was generated.
    pub image_url: Option<String>,
}

impl GenerationResult {
    pub fn new(
        platform: &PlatformSpec,
        outcome: Outcome<String>,
        image_url: Option<String>,
    ) -> Self {
        let length = outcome
            .as_ref()
            .ok()
            .map(|text| platform.length_status(text));

        Self {
            platform: platform.name.clone(),
            outcome,
            length,
            image_url,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.outcome.as_deref().ok()
    }

    pub fn failure(&self) -> Option<&ProviderFailure> {
        self.outcome.as_ref().err()
    }

    pub fn character_count(&self) -> Option<usize> {
        self.length.map(|l| l.count)
    }

    /// `false` for failures and for posts over the limit.
    pub fn within_limit(&self) -> bool {
        self.length.is_some_and(|l| l.within_limit)
    }

    /// Only real content may be offered for copying; failures are not.
    pub fn is_copyable(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Text to show in the post panel: the content, or the failure line.
    pub fn display_text(&self) -> String {
        match &self.outcome {
            Ok(text) => text.clone(),
            Err(failure) => failure.to_string(),
        }
    }
}
