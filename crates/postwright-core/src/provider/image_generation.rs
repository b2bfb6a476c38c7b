use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    credential::ApiKey,
    error::Result,
    generic::GeneratedImage,
    model::{Model, ProviderId},
};

use super::BoxFuture;

/// A backend that can render a prompt into a hosted image.
///
/// Only some providers offer this capability; the registry stores it as an
/// optional second trait object next to the mandatory
/// [`TextGenerationProvider`](super::TextGenerationProvider).
pub trait ImageGenerationProvider: Send + Sync {
    fn provider_id(&self) -> ProviderId;

    /// Render the prompt and return the URL of the first image.
    fn generate_image<'p>(
        &'p self,
        api_key: &'p ApiKey,
        params: ImageGenerationParameters,
    ) -> BoxFuture<'p, Result<GeneratedImage>>;
}

#[derive(Debug, Clone)]
pub struct ImageGenerationParameters {
    pub prompt: String,
    pub model: Model,
    pub size: ImageSize,
    pub quality: ImageQuality,
}

impl ImageGenerationParameters {
    /// Square, standard-quality render.
    pub fn new(prompt: impl Into<String>, model: Model) -> Self {
        Self {
            prompt: prompt.into(),
            model,
            size: ImageSize::Square1024,
            quality: ImageQuality::Standard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1024x1024")]
    Square1024,
}

impl Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSize::Square1024 => write!(f, "1024x1024"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageQuality {
    Standard,
}
