use postwright_core::error::PostwrightError;
use postwright_core::generic::GenericRole;
use postwright_core::provider::TextGenerationParameters;
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

/// Body of `POST /v1beta/models/{model}:generateContent`.
///
/// The model is part of the URL, so it travels next to the body rather than
/// inside it.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Resolved model name plus request body.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub model: String,
    pub body: GenerateContentRequest,
}

impl TryFrom<TextGenerationParameters> for ModelRequest {
    type Error = PostwrightError;

    fn try_from(value: TextGenerationParameters) -> Result<Self, Self::Error> {
        let model = map_model(&value.model)
            .ok_or_else(|| PostwrightError::ModelNotSupported {
                provider: "gemini",
                model: format!("{:?}", value.model),
            })?
            .into_owned();

        let mut system_parts = Vec::new();
        let mut contents = Vec::new();
        for message in value.messages {
            let part = Part {
                text: Some(message.content),
            };
            match message.role {
                GenericRole::System => system_parts.push(part),
                GenericRole::User => contents.push(Content {
                    role: Some(ContentRole::User),
                    parts: vec![part],
                }),
                GenericRole::Assistant => contents.push(Content {
                    role: Some(ContentRole::Model),
                    parts: vec![part],
                }),
            }
        }

        if contents.is_empty() {
            return Err(PostwrightError::InvalidRequest(
                "Gemini requires at least one user message".into(),
            ));
        }

        Ok(Self {
            model,
            body: GenerateContentRequest {
                contents,
                system_instruction: (!system_parts.is_empty()).then_some(Content {
                    role: None,
                    parts: system_parts,
                }),
                generation_config: GenerationConfig {
                    max_output_tokens: value.max_tokens,
                    temperature: value.temperature,
                },
            },
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    User,
    Model,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ContentRole>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated in order.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let parts: Vec<&str> = candidate
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        (!parts.is_empty()).then(|| parts.concat())
    }

    /// Why the prompt or the first candidate was blocked, if it was.
    pub fn block_reason(&self) -> Option<String> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.clone())
        {
            return Some(reason);
        }

        self.candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
            .filter(|reason| matches!(*reason, "SAFETY" | "RECITATION" | "BLOCKLIST"))
            .map(str::to_owned)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: i64,
    #[serde(default)]
    pub candidates_token_count: i64,
    #[serde(default)]
    pub total_token_count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// `{"error":{"code":400,"message":"...","status":"INVALID_ARGUMENT"}}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiErrorEnvelope {
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(ApiErrorEnvelope {
                error:
                    ApiErrorDetail {
                        message,
                        status: Some(status),
                    },
            }) => format!("{status}: {message}"),
            Ok(envelope) => envelope.error.message,
            Err(_) => body.trim().to_owned(),
        }
    }
}
