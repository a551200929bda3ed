//! Request construction for the two `generateContent` pipelines.
//!
//! Pure assembly: prompts arrive already validated as [`Prompt`], and the
//! produced [`ApiRequest`] is immutable once built.

use super::types::{Content, GenerateContentRequest, GenerationConfig, Part, Prompt};
use crate::config::Config;
use std::time::Duration;

/// Which `generateContent` pipeline a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Chat,
    Image,
}

impl Endpoint {
    /// The model ID configured for this pipeline.
    pub fn model<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Endpoint::Chat => &config.chat_model,
            Endpoint::Image => &config.image_model,
        }
    }

    /// The request deadline configured for this pipeline.
    pub fn timeout(&self, config: &Config) -> Duration {
        match self {
            Endpoint::Chat => config.chat_timeout,
            Endpoint::Image => config.image_timeout,
        }
    }
}

/// A fully assembled API call: target endpoint plus request body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub body: GenerateContentRequest,
}

fn prompt_contents(prompt: &Prompt) -> Vec<Content> {
    vec![Content {
        role: None,
        parts: vec![Part::Text {
            text: prompt.as_str().to_string(),
        }],
    }]
}

/// Builds a chat-completion request: the prompt as the sole text part.
pub fn build_chat_request(prompt: &Prompt) -> ApiRequest {
    ApiRequest {
        endpoint: Endpoint::Chat,
        body: GenerateContentRequest {
            contents: prompt_contents(prompt),
            generation_config: None,
        },
    }
}

/// Builds an image-generation request: same contents, plus a
/// `generationConfig` asking for both text and image modalities.
pub fn build_image_request(prompt: &Prompt) -> ApiRequest {
    ApiRequest {
        endpoint: Endpoint::Image,
        body: GenerateContentRequest {
            contents: prompt_contents(prompt),
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            }),
        },
    }
}
