use postwright_core::ApiKey;
use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use std::time::Duration;

use crate::{
    api_v1::{ApiErrorEnvelope, GenerateContentResponse, ModelRequest},
    error::GeminiError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Minimal HTTP client for the Gemini *generateContent* endpoint.
///
/// The key is sent in the `x-goog-api-key` header rather than the `?key=`
/// query parameter so it never appears in a URL, and therefore never in a
/// `reqwest::Error` message.
#[derive(Clone)]
pub struct GeminiClient {
    http: HttpClient,
    base: String,
    timeout: Duration,
}

impl GeminiClient {
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

    pub async fn generate_content(
        &self,
        api_key: &ApiKey,
        request: ModelRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let headers = headers(api_key)?;
        let url = format!("{}/models/{}:generateContent", self.base, request.model);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "sending Gemini request");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status,
                body: ApiErrorEnvelope::message_from_body(&body),
            });
        }

        let bytes = resp.bytes().await.map_err(|err| self.classify(err))?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }

    fn classify(&self, err: reqwest::Error) -> GeminiError {
        if err.is_timeout() {
            GeminiError::Timeout(self.timeout)
        } else {
            GeminiError::Http(err)
        }
    }
}

fn headers(api_key: &ApiKey) -> Result<HeaderMap, GeminiError> {
    let mut key =
        HeaderValue::from_str(api_key.expose()).map_err(|_| GeminiError::InvalidApiKey)?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static("x-goog-api-key"), key);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_travels_in_sensitive_header() {
        let headers = headers(&ApiKey::new("AIza-test")).unwrap();
        let key = headers.get("x-goog-api-key").unwrap();
        assert!(key.is_sensitive());
        assert_eq!(key.to_str().unwrap(), "AIza-test");
    }

    #[test]
    fn default_base_url() {
        let client = GeminiClient::with_http(HttpClient::new(), None, DEFAULT_TIMEOUT);
        assert_eq!(
            client.base_url(),
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }
}
