//! HTTP transport for the Gemini `generateContent` API.
//!
//! Owns the exchange only: it reports success or a classified transport
//! error, and hands the parsed JSON body to the interpreter untouched.

use super::request::ApiRequest;
use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Lightweight Gemini REST client used by the chat and image pipelines.
pub struct GeminiHttpClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiHttpClient {
    /// Construct a Gemini client.
    ///
    /// `model` should be the bare model ID (for example `gemini-2.5-flash`),
    /// not a `models/...`-prefixed path segment.
    pub fn new(api_key: String, model: String, timeout: Duration) -> Self {
        Self::new_with_client(api_key, model, timeout, Client::new())
    }

    pub fn new_with_client(
        api_key: String,
        model: String,
        timeout: Duration,
        client: Client,
    ) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(&model).to_string();

        Self {
            client,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Returns the configured model ID without the `models/` prefix.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Posts a built request and returns the parsed JSON body on success.
    ///
    /// Non-2xx statuses become [`Error::Api`]; a missed deadline becomes
    /// [`Error::Timeout`]. The interpreter never sees either.
    pub async fn dispatch(&self, request: &ApiRequest) -> Result<serde_json::Value> {
        tracing::debug!(
            "Sending {:?} request to Gemini model {}",
            request.endpoint,
            self.model
        );

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .json(&request.body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    tracing::error!("Gemini request timed out after {:?}", self.timeout);
                    Error::Timeout(self.timeout)
                } else {
                    tracing::error!("Failed to send request to Gemini: {}", e);
                    Error::Http(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(Error::Api {
                status,
                message: error_text,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Gemini returned a non-JSON body: {}\nBody: {}", e, body);
            Error::UnexpectedFormat(format!("response body is not JSON: {}", e))
        })
    }
}
