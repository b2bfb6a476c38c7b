use std::sync::Arc;

use postwright_core::{
    ApiKey, ProviderId,
    error::Result,
    generic::{GeneratedText, GenericUsageReport},
    provider::{BoxFuture, TextGenerationParameters, TextGenerationProvider},
};

use crate::{
    AnthropicAdapter,
    api_v1::{MessagesRequest, MessagesResponse},
    error::AnthropicError,
};

impl TextGenerationProvider for AnthropicAdapter {
    fn provider_id(&self) -> ProviderId {
        ProviderId::Claude
    }

    fn generate_text<'p>(
        &'p self,
        api_key: &'p ApiKey,
        params: TextGenerationParameters,
    ) -> BoxFuture<'p, Result<GeneratedText>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = MessagesRequest::try_from(params)?;
            let response = client.messages(api_key, request).await?;
            Ok(reply_text(response)?)
        })
    }
}

pub(crate) fn reply_text(
    response: MessagesResponse,
) -> std::result::Result<GeneratedText, AnthropicError> {
    let text = response
        .text()
        .ok_or_else(|| AnthropicError::Format("reply contains no text block".into()))?;

    let usage = response.usage.map(|usage| GenericUsageReport {
        prompt_tokens: usage.input_tokens,
        completion_tokens: usage.output_tokens,
        total_tokens: usage.input_tokens + usage.output_tokens,
    });

    Ok(GeneratedText { text, usage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnthropicAdapterBuilder;
    use postwright_core::{FailureKind, generic::GenericMessage, model::AnthropicModel};
    use std::time::Duration;

    #[test]
    fn usage_totals_are_summed() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{"id":"m","model":"c","role":"assistant",
                "content":[{"type":"text","text":"ok"}],
                "stop_reason":"end_turn",
                "usage":{"input_tokens":10,"output_tokens":5}}"#,
        )
        .unwrap();
        let generated = reply_text(response).unwrap();
        assert_eq!(generated.text, "ok");
        assert_eq!(generated.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn empty_reply_is_a_format_error() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{"id":"m","model":"c","role":"assistant","content":[],"stop_reason":"end_turn"}"#,
        )
        .unwrap();
        assert!(matches!(reply_text(response), Err(AnthropicError::Format(_))));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_failure() {
        let adapter = AnthropicAdapterBuilder::new()
            .with_base_url("http://127.0.0.1:9/v1")
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let params = TextGenerationParameters::new(
            vec![GenericMessage::user("hello")],
            AnthropicModel::Claude3Sonnet.into(),
        );

        let err = adapter
            .generate_text(&ApiKey::new("sk-ant"), params)
            .await
            .unwrap_err();
        assert!(matches!(
            err.failure_kind(),
            FailureKind::Network | FailureKind::Timeout
        ));
    }
}
