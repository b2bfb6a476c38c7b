//! Generic message and role types used by the *postwright-core* crate.
//!
//! They mirror the concepts exposed by most provider APIs (“system”, “user”,
//! “assistant”). Staying minimal and provider-agnostic means we can
//!
//! * convert them into provider-specific structs via a simple `From`/`Into`,
//! * serialize them without pulling in heavyweight dependencies, and
//! * use them in unit tests without mocking a full transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A single chat message, independent of any specific provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub content: String,
    pub role: GenericRole,
}

impl GenericMessage {
    /// ```rust
    /// use postwright_core::generic::{GenericMessage, GenericRole};
    ///
    /// let msg = GenericMessage::new("Write a tweet.".into(), GenericRole::User);
    /// assert_eq!(msg.role.to_string(), "user");
    /// ```
    pub fn new(content: String, role: GenericRole) -> Self {
        Self { content, role }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content.into(), GenericRole::User)
    }
}

/// High-level chat roles recognised by most providers.
///
/// `Display` renders the canonical lowercase name.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// Global behaviour and style guidelines.
    System,
    /// Messages produced by the model.
    Assistant,
    /// Messages originating from the human user.
    User,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
        }
    }
}

/// Text artifact returned by a [`TextGenerationProvider`](crate::provider::TextGenerationProvider).
#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub text: String,
    pub usage: Option<GenericUsageReport>,
}

/// Image artifact returned by an [`ImageGenerationProvider`](crate::provider::ImageGenerationProvider).
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub url: String,
    /// Some providers rewrite the prompt before rendering.
    pub revised_prompt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericUsageReport {
    pub prompt_tokens: i64,
    pub completion_tokens: i64,
    pub total_tokens: i64,
}
