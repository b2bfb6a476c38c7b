//! Provider and model identifiers used throughout the **postwright** workspace.
//!
//! The enum hierarchy keeps the public API simple while allowing each
//! provider crate to map the variants onto its own naming scheme. You never
//! have to type literal strings such as `"gpt-3.5-turbo"` in application
//! code: pick an enum variant and let the adapter translate it.
//!
//! # Adding more models
//!
//! 1. Add the variant to the provider sub-enum (`OpenAiModel`, …).
//! 2. Update the mapping function in the provider crate
//!    (`postwright-openai::model_map::map_model`, etc.).
//! 3. The compiler tells you where a `match` is now incomplete.
//!
//! # Example
//!
//! ```rust
//! use postwright_core::model::{Model, OpenAiModel};
//! assert_eq!(Model::from(OpenAiModel::Gpt35Turbo),
//!            Model::OpenAi(OpenAiModel::Gpt35Turbo));
//! ```
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PostwrightError;

/// Identity of a generation backend.
///
/// The serialised form (`"openai"`, `"claude"`, `"gemini"`) is the stable
/// identifier used in configuration and on the command line; `Display`
/// renders the human-facing name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderId {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "claude")]
    Claude,
    #[serde(rename = "gemini")]
    Gemini,
}

impl ProviderId {
    pub const ALL: [ProviderId; 3] = [ProviderId::OpenAi, ProviderId::Claude, ProviderId::Gemini];

    /// Stable lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::Claude => "claude",
            ProviderId::Gemini => "gemini",
        }
    }

    /// Human-facing provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "OpenAI",
            ProviderId::Claude => "Claude",
            ProviderId::Gemini => "Gemini",
        }
    }

    /// Model every text generation for this provider is pinned to.
    pub fn text_model(&self) -> Model {
        match self {
            ProviderId::OpenAi => Model::OpenAi(OpenAiModel::Gpt35Turbo),
            ProviderId::Claude => Model::Anthropic(AnthropicModel::Claude3Sonnet),
            ProviderId::Gemini => Model::Gemini(GeminiModel::GeminiPro),
        }
    }

    /// Image model, for providers that can render images at all.
    pub fn image_model(&self) -> Option<Model> {
        match self {
            ProviderId::OpenAi => Some(Model::OpenAi(OpenAiModel::DallE3)),
            ProviderId::Claude | ProviderId::Gemini => None,
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProviderId {
    type Err = PostwrightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PostwrightError::Invalid(format!("unknown provider `{s}`")))
    }
}

/// Universal identifier for a generation model.
///
/// * Provider variants – enumerated list of officially supported models.
/// * `Custom` – any model name not yet covered by a dedicated enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    OpenAi(OpenAiModel),
    Anthropic(AnthropicModel),
    Gemini(GeminiModel),
    /// Provider-native model name, passed through untouched.
    Custom(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt35Turbo,
    DallE3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnthropicModel {
    Claude3Sonnet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeminiModel {
    GeminiPro,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}

impl From<AnthropicModel> for Model {
    fn from(val: AnthropicModel) -> Self {
        Model::Anthropic(val)
    }
}

impl From<GeminiModel> for Model {
    fn from(val: GeminiModel) -> Self {
        Model::Gemini(val)
    }
}
