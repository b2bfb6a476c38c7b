use postwright_core::ApiKey;
use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1::{ApiErrorEnvelope, MessagesRequest, MessagesResponse},
    error::AnthropicError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Minimal HTTP client for the Anthropic *messages* endpoint.
#[derive(Clone)]
pub struct AnthropicClient {
    http: HttpClient,
    base: String,
    timeout: Duration,
}

impl AnthropicClient {
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

    /// Perform a **non-streaming** messages call.
    pub async fn messages(
        &self,
        api_key: &ApiKey,
        request: MessagesRequest,
    ) -> Result<MessagesResponse, AnthropicError> {
        let headers = headers(api_key)?;
        let url = format!("{}/messages", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, model = %request.model, "sending Anthropic request");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AnthropicError::Api {
                status,
                body: ApiErrorEnvelope::message_from_body(&body),
            });
        }

        let bytes = resp.bytes().await.map_err(|err| self.classify(err))?;
        let parsed: MessagesResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }

    fn classify(&self, err: reqwest::Error) -> AnthropicError {
        if err.is_timeout() {
            AnthropicError::Timeout(self.timeout)
        } else {
            AnthropicError::Http(err)
        }
    }
}

fn headers(api_key: &ApiKey) -> Result<HeaderMap, AnthropicError> {
    let mut key =
        HeaderValue::from_str(api_key.expose()).map_err(|_| AnthropicError::InvalidApiKey)?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static("x-api-key"), key);
    headers.insert(
        HeaderName::from_static("anthropic-version"),
        HeaderValue::from_static(ANTHROPIC_VERSION),
    );
    Ok(headers)
}
