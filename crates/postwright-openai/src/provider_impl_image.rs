use std::sync::Arc;

use postwright_core::{
    ApiKey, ProviderId,
    error::Result,
    generic::GeneratedImage,
    provider::{BoxFuture, ImageGenerationParameters, ImageGenerationProvider},
};

use crate::{
    OpenAiAdapter,
    api_v1::{ImageGenerationRequest, ImageGenerationResponse},
    error::OpenAiError,
};

impl ImageGenerationProvider for OpenAiAdapter {
    fn provider_id(&self) -> ProviderId {
        ProviderId::OpenAi
    }

    fn generate_image<'p>(
        &'p self,
        api_key: &'p ApiKey,
        params: ImageGenerationParameters,
    ) -> BoxFuture<'p, Result<GeneratedImage>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ImageGenerationRequest::try_from(params)?;
            let response = client.image_generation(api_key, request).await?;
            Ok(first_image_url(response)?)
        })
    }
}

pub(crate) fn first_image_url(
    response: ImageGenerationResponse,
) -> std::result::Result<GeneratedImage, OpenAiError> {
    response
        .data
        .into_iter()
        .find_map(|image| {
            image.url.map(|url| GeneratedImage {
                url,
                revised_prompt: image.revised_prompt,
            })
        })
        .ok_or_else(|| OpenAiError::Format("response contains no image URL".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_url_wins() {
        let response: ImageGenerationResponse = serde_json::from_str(
            r#"{"created":0,"data":[{"b64_json":"AAAA"},{"url":"https://a"},{"url":"https://b"}]}"#,
        )
        .unwrap();
        assert_eq!(first_image_url(response).unwrap().url, "https://a");
    }

    #[test]
    fn empty_data_is_a_format_error() {
        let response: ImageGenerationResponse =
            serde_json::from_str(r#"{"created":0,"data":[]}"#).unwrap();
        assert!(matches!(first_image_url(response), Err(OpenAiError::Format(_))));
    }
}
