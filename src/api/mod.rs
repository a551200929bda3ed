//! Gemini API integration: request building, transport, and response
//! interpretation for the chat and image-generation pipelines.

pub mod chat;
pub mod client;
pub mod image;
pub mod interpret;
pub mod mock;
pub mod request;
pub mod types;

pub use chat::GeminiChatClient;
pub use image::{GeminiImageClient, GeneratedImage};
pub use interpret::{interpret, InlineImage, Interpreted};
pub use mock::{MockChatClient, MockImageClient};
pub use request::{build_chat_request, build_image_request, ApiRequest, Endpoint};
pub use types::Prompt;

use crate::Result;
use async_trait::async_trait;

/// Text chat completion: one validated prompt in, one reply out.
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn send(&self, prompt: &Prompt) -> Result<String>;
}

/// Text-to-image generation: one validated prompt in, decoded image media
/// (plus any accompanying text) out.
#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate(&self, prompt: &Prompt) -> Result<GeneratedImage>;
}


#[cfg(test)]
macro_rules! impl_with_gemini_base_url {
    ($client:ty) => {
        impl $client {
            pub fn with_base_url(mut self, base_url: String) -> Self {
                self.http = self.http.with_base_url(base_url);
                self
            }
        }
    };
}

#[cfg(test)]
pub(crate) use impl_with_gemini_base_url;
