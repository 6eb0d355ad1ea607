//! HTTP client for the Gemini `generateContent` endpoint.

use axum::body::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde_json::value::RawValue;

use super::error::UpstreamError;

const API_VERSION: &str = "v1beta";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over a pooled `reqwest::Client` bound to one model.
///
/// Holds no credential: the key is supplied per call and only ever placed in
/// the outbound query string.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Fails only if the TLS backend cannot be initialised.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> reqwest::Result<Self> {
        // No request timeout: a slow upstream holds the invocation open.
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
        })
    }

    /// Endpoint URL without the `key` query parameter.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{API_VERSION}/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// POST `body` verbatim to the upstream and return its JSON payload untouched.
    pub async fn generate_content(
        &self,
        api_key: &str,
        body: Bytes,
    ) -> Result<Box<RawValue>, UpstreamError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(UpstreamError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(UpstreamError::transport)?;
            return Err(UpstreamError::Rejected { status, body: text });
        }

        let raw = response.bytes().await.map_err(UpstreamError::transport)?;
        Ok(serde_json::from_slice(&raw)?)
    }
}
