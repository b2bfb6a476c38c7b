use crate::{
    credential::ApiKey,
    error::Result,
    generic::{GeneratedText, GenericMessage},
    model::{Model, ProviderId},
};

use super::BoxFuture;

/// Upper bound on generated tokens for every post.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Sampling temperature applied wherever the provider accepts one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// A **backend** turns a chat prompt into a network call to a concrete
/// provider (OpenAI, Anthropic, Gemini) and extracts the primary text reply.
///
/// The trait is intentionally minimal:
///
/// * **No stored credential** – the key arrives with every call and is
///   dropped afterwards.
/// * **One async-ish method** – `generate_text`, which performs a *single*
///   non-streaming round-trip.
///
/// The method returns a boxed future so the trait stays object-safe without
/// pulling in `async_trait`; the registry stores providers as trait objects.
pub trait TextGenerationProvider: Send + Sync {
    /// Identity reported in logs and failures.
    fn provider_id(&self) -> ProviderId;

    /// Execute the prompt and return the first text artifact.
    fn generate_text<'p>(
        &'p self,
        api_key: &'p ApiKey,
        params: TextGenerationParameters,
    ) -> BoxFuture<'p, Result<GeneratedText>>;
}

#[derive(Debug, Clone)]
pub struct TextGenerationParameters {
    pub messages: Vec<GenericMessage>,
    pub model: Model,
    pub max_tokens: u32,
    pub temperature: Option<f64>,
}

impl TextGenerationParameters {
    /// Parameters with the fixed output budget and temperature.
    pub fn new(messages: Vec<GenericMessage>, model: Model) -> Self {
        Self {
            messages,
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: Some(DEFAULT_TEMPERATURE),
        }
    }

    pub fn messages(&self) -> &[GenericMessage] {
        &self.messages
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    /// Concatenated content of all messages, in order.
    ///
    /// Handy for providers whose wire format only takes a single input
    /// string.
    pub fn joined_content(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OpenAiModel;

    #[test]
    fn new_parameters_carry_fixed_budget() {
        let params = TextGenerationParameters::new(
            vec![GenericMessage::user("hi")],
            OpenAiModel::Gpt35Turbo.into(),
        );
        assert_eq!(params.max_tokens, 500);
        assert_eq!(params.temperature, Some(0.7));
    }

    #[test]
    fn joined_content_keeps_message_order() {
        let params = TextGenerationParameters::new(
            vec![GenericMessage::user("first"), GenericMessage::user("second")],
            OpenAiModel::Gpt35Turbo.into(),
        );
        assert_eq!(params.joined_content(), "first\n\nsecond");
    }
}
