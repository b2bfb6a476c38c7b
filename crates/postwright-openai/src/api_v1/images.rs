use postwright_core::error::PostwrightError;
use postwright_core::provider::{ImageGenerationParameters, ImageQuality, ImageSize};
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

/// Body of `POST /v1/images/generations`.
///
/// Renders are always returned as hosted URLs.
#[derive(Debug, Serialize, Clone)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: ImageSize,
    pub quality: ImageQuality,
    pub response_format: ImageResponseFormat,
}

impl TryFrom<ImageGenerationParameters> for ImageGenerationRequest {
    type Error = PostwrightError;

    fn try_from(value: ImageGenerationParameters) -> Result<Self, Self::Error> {
        Ok(Self {
            model: map_model(&value.model)
                .ok_or_else(|| PostwrightError::ModelNotSupported {
                    provider: "openai",
                    model: format!("{:?}", value.model),
                })?
                .into(),
            prompt: value.prompt,
            n: 1,
            size: value.size,
            quality: value.quality,
            response_format: ImageResponseFormat::Url,
        })
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    Url,
}

#[derive(Debug, Deserialize)]
pub struct ImageGenerationResponse {
    pub created: i64,
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}
