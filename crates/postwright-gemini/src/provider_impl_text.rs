use std::sync::Arc;

use postwright_core::{
    ApiKey, ProviderId,
    error::Result,
    generic::{GeneratedText, GenericUsageReport},
    provider::{BoxFuture, TextGenerationParameters, TextGenerationProvider},
};

use crate::{
    GeminiAdapter,
    api_v1::{GenerateContentResponse, ModelRequest},
    error::GeminiError,
};

impl TextGenerationProvider for GeminiAdapter {
    fn provider_id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn generate_text<'p>(
        &'p self,
        api_key: &'p ApiKey,
        params: TextGenerationParameters,
    ) -> BoxFuture<'p, Result<GeneratedText>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ModelRequest::try_from(params)?;
            let response = client.generate_content(api_key, request).await?;
            Ok(candidate_text(response)?)
        })
    }
}

pub(crate) fn candidate_text(
    response: GenerateContentResponse,
) -> std::result::Result<GeneratedText, GeminiError> {
    if let Some(reason) = response.block_reason() {
        return Err(GeminiError::Format(format!(
            "response was blocked ({reason})"
        )));
    }

    let text = response
        .text()
        .ok_or_else(|| GeminiError::Format("response has no candidate text".into()))?;

    let usage = response.usage_metadata.map(|usage| GenericUsageReport {
        prompt_tokens: usage.prompt_token_count,
        completion_tokens: usage.candidates_token_count,
        total_tokens: usage.total_token_count,
    });

    Ok(GeneratedText { text, usage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeminiAdapterBuilder;
    use postwright_core::{FailureKind, generic::GenericMessage, model::GeminiModel};
    use std::time::Duration;

    #[test]
    fn blocked_candidate_is_a_format_error() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"finishReason":"SAFETY","content":{"parts":[]}}]}"#,
        )
        .unwrap();
        let err = candidate_text(response).unwrap_err();
        assert!(err.to_string().contains("blocked (SAFETY)"));
    }

    #[test]
    fn no_candidates_is_a_format_error() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(candidate_text(response), Err(GeminiError::Format(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_failure() {
        let adapter = GeminiAdapterBuilder::new()
            .with_base_url("http://127.0.0.1:9/v1beta")
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let params = TextGenerationParameters::new(
            vec![GenericMessage::user("hello")],
            GeminiModel::GeminiPro.into(),
        );

        let err = adapter
            .generate_text(&ApiKey::new("AIza"), params)
            .await
            .unwrap_err();
        assert!(matches!(
            err.failure_kind(),
            FailureKind::Network | FailureKind::Timeout
        ));
    }
}
