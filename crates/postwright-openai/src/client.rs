use postwright_core::ApiKey;
use reqwest::{
    Client as HttpClient, Response,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::{
    api_v1::{
        ApiErrorEnvelope, ChatCompletionRequest, ChatCompletionResponse, ImageGenerationRequest,
        ImageGenerationResponse,
    },
    error::OpenAiError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Minimal HTTP client for OpenAI’s *chat/completions* and
/// *images/generations* endpoints.
///
/// * Non-streaming only (one request ▶ one response).
/// * The API key is supplied per call and only lives in the request headers.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    http: HttpClient,
    base: String,
    timeout: Duration,
}

impl OpenAiClient {
    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc. `timeout` is only used for error reporting;
    /// the bound itself is whatever `http` was configured with.
    pub fn with_http(http: HttpClient, base_url: Option<String>, timeout: Duration) -> Self {
        Self {
            http,
            base: base_url
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        api_key: &ApiKey,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        self.post_json("chat/completions", api_key, &request).await
    }

    /// Request image renders; URLs are returned, not image bytes.
    pub async fn image_generation(
        &self,
        api_key: &ApiKey,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, OpenAiError> {
        self.post_json("images/generations", api_key, &request).await
    }

    async fn post_json<B, R>(
        &self,
        endpoint: &str,
        api_key: &ApiKey,
        body: &B,
    ) -> Result<R, OpenAiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let headers = auth_headers(api_key)?;
        let url = format!("{}/{endpoint}", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "sending OpenAI request");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let resp = check_status(resp).await?;

        let bytes = resp.bytes().await.map_err(|err| self.classify(err))?;
        let parsed: R = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }

    fn classify(&self, err: reqwest::Error) -> OpenAiError {
        if err.is_timeout() {
            OpenAiError::Timeout(self.timeout)
        } else {
            OpenAiError::Http(err)
        }
    }
}

fn auth_headers(api_key: &ApiKey) -> Result<HeaderMap, OpenAiError> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key.expose()))
        .map_err(|_| OpenAiError::InvalidApiKey)?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}

async fn check_status(resp: Response) -> Result<Response, OpenAiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }

    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();

    #[cfg(feature = "tracing")]
    tracing::debug!(%status, "OpenAI returned an error status");

    Err(OpenAiError::Api {
        status,
        body: ApiErrorEnvelope::message_from_body(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_header_is_sensitive() {
        let headers = auth_headers(&ApiKey::new("sk-test")).unwrap();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert!(auth.is_sensitive());
        assert_eq!(auth.to_str().unwrap(), "Bearer sk-test");
    }

    #[test]
    fn newline_in_key_is_rejected() {
        assert!(matches!(
            auth_headers(&ApiKey::new("sk-\nbad")),
            Err(OpenAiError::InvalidApiKey)
        ));
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = OpenAiClient::with_http(
            HttpClient::new(),
            Some("http://localhost:8080/v1/".into()),
            DEFAULT_TIMEOUT,
        );
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }
}
