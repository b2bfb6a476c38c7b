use std::sync::Arc;

use postwright_core::{
    ApiKey, ProviderId,
    error::Result,
    generic::{GeneratedText, GenericUsageReport},
    provider::{BoxFuture, TextGenerationParameters, TextGenerationProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ChatCompletionRequest, ChatCompletionResponse, FinishReason},
    error::OpenAiError,
};

impl TextGenerationProvider for OpenAiAdapter {
    fn provider_id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    fn generate_text<'p>(
        &'p self,
        api_key: &'p ApiKey,
        params: TextGenerationParameters,
    ) -> BoxFuture<'p, Result<GeneratedText>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatCompletionRequest::try_from(params)?;
            let response = client.chat_completion(api_key, request).await?;
            Ok(first_choice_text(response)?)
        })
    }
}

/// Text of the first choice, with usage when reported.
pub(crate) fn first_choice_text(
    response: ChatCompletionResponse,
) -> std::result::Result<GeneratedText, OpenAiError> {
    let usage = response.usage.map(|usage| GenericUsageReport {
        prompt_tokens: usage.prompt_tokens as i64,
        completion_tokens: usage.completion_tokens as i64,
        total_tokens: usage.total_tokens as i64,
    });

    let Some(first_choice) = response.choices.into_iter().next() else {
        return Err(OpenAiError::Format("response has no choices".into()));
    };

    match first_choice.finish_reason {
        Some(FinishReason::ContentFilter) => {
            return Err(OpenAiError::Format(
                "completion was stopped by the content filter".into(),
            ));
        }
        #[cfg(feature = "tracing")]
        Some(FinishReason::Length) => {
            tracing::debug!("completion hit the token limit; returning truncated text");
        }
        _ => {}
    }

    let message = first_choice.message;
    match message.content {
        Some(text) => Ok(GeneratedText { text, usage }),
        None => Err(OpenAiError::Format(
            message
                .refusal
                .map(|refusal| format!("model refused: {refusal}"))
                .unwrap_or_else(|| "first choice has no content".into()),
        )),
    }
}
