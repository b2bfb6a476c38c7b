use postwright_core::error::PostwrightError;
use postwright_core::generic::GenericRole;
use postwright_core::provider::TextGenerationParameters;
use serde::{Deserialize, Serialize};

use crate::model_map::map_model;

/// Body of `POST /v1/messages`.
#[derive(Debug, Serialize, Clone)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Anthropic takes system instructions as a top-level field, so system
/// messages are lifted out of the conversation.
impl TryFrom<TextGenerationParameters> for MessagesRequest {
    type Error = PostwrightError;

    fn try_from(value: TextGenerationParameters) -> Result<Self, Self::Error> {
        let model = map_model(&value.model)
            .ok_or_else(|| PostwrightError::ModelNotSupported {
                provider: "claude",
                model: format!("{:?}", value.model),
            })?
            .into_owned();

        let mut system = Vec::new();
        let mut messages = Vec::new();
        for message in value.messages {
            match message.role {
                GenericRole::System => system.push(message.content),
                GenericRole::User => messages.push(Message {
                    role: MessageRole::User,
                    content: message.content,
                }),
                GenericRole::Assistant => messages.push(Message {
                    role: MessageRole::Assistant,
                    content: message.content,
                }),
            }
        }

        if messages.is_empty() {
            return Err(PostwrightError::InvalidRequest(
                "Anthropic requires at least one user message".into(),
            ));
        }

        Ok(Self {
            model,
            max_tokens: value.max_tokens,
            messages,
            system: (!system.is_empty()).then(|| system.join("\n\n")),
            temperature: value.temperature,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub id: String,
    pub model: String,
    pub role: MessageRole,
    pub content: Vec<ContentBlock>,
    pub stop_reason: Option<StopReason>,
    pub usage: Option<Usage>,
}

impl MessagesResponse {
    /// All text blocks of the reply, concatenated in order.
    pub fn text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .collect();

        (!parts.is_empty()).then(|| parts.concat())
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
    ToolUse,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Usage {
    pub input_tokens: i64,
    pub output_tokens: i64,
}

/// `{"type":"error","error":{"type":"authentication_error","message":"..."}}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub r#type: String,
    pub message: String,
}

impl ApiErrorEnvelope {
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| format!("{}: {}", envelope.error.r#type, envelope.error.message))
            .unwrap_or_else(|_| body.trim().to_owned())
    }
}
