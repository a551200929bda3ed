//! Image-generation pipeline facade.

use super::client::GeminiHttpClient;
use super::interpret::{interpret, InlineImage, Interpreted};
use super::request::{build_image_request, Endpoint};
use super::types::Prompt;
use super::ImageGenerationService;
use crate::config::Config;
use crate::Result;
use async_trait::async_trait;

/// Outcome of an image-generation exchange.
///
/// The model may answer with text only (for example a refusal), so `images`
/// can legitimately be empty while `text` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub text: Option<String>,
    pub images: Vec<InlineImage>,
}

impl GeneratedImage {
    /// The current display image: the last inline-data part returned.
    pub fn primary(&self) -> Option<&InlineImage> {
        self.images.last()
    }
}

pub struct GeminiImageClient {
    http: GeminiHttpClient,
}

impl GeminiImageClient {
    pub fn new(config: &Config) -> Self {
        Self::new_with_client(config, reqwest::Client::new())
    }

    pub fn new_with_client(config: &Config, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                config.api_key.clone(),
                Endpoint::Image.model(config).to_string(),
                Endpoint::Image.timeout(config),
                client,
            ),
        }
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiImageClient);

#[async_trait]
impl ImageGenerationService for GeminiImageClient {
    async fn generate(&self, prompt: &Prompt) -> Result<GeneratedImage> {
        let request = build_image_request(prompt);
        let raw = self.http.dispatch(&request).await?;

        match interpret(raw)? {
            Interpreted::Image { text, images } => {
                tracing::debug!(
                    "Gemini returned {} image(s) for prompt of {} chars",
                    images.len(),
                    prompt.as_str().len()
                );
                Ok(GeneratedImage { text, images })
            }
            Interpreted::Text { text } => Ok(GeneratedImage {
                text: Some(text),
                images: Vec::new(),
            }),
        }
    }
}
