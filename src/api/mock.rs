//! Scriptable in-memory service implementations for tests and dry runs.

use super::image::GeneratedImage;
use super::interpret::InlineImage;
use super::types::Prompt;
use super::{ChatService, ImageGenerationService};
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub struct MockChatClient {
    replies: Arc<Mutex<Vec<String>>>,
    received_prompts: Arc<Mutex<Vec<String>>>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            received_prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_reply(self, reply: String) -> Self {
        self.replies.lock().unwrap().push(reply);
        self
    }

    pub fn call_count(&self) -> usize {
        self.received_prompts.lock().unwrap().len()
    }

    pub fn received_prompts(&self) -> Vec<String> {
        self.received_prompts.lock().unwrap().clone()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatService for MockChatClient {
    async fn send(&self, prompt: &Prompt) -> Result<String> {
        let mut received = self.received_prompts.lock().unwrap();
        received.push(prompt.as_str().to_string());
        let count = received.len();

        let replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            Ok(format!("Echo: {}", prompt.as_str()))
        } else {
            Ok(replies[(count - 1) % replies.len()].clone())
        }
    }
}

pub struct MockImageClient {
    responses: Arc<Mutex<Vec<GeneratedImage>>>,
    received_prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            received_prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_image(self, bytes: Vec<u8>, mime_type: &str) -> Self {
        self.responses.lock().unwrap().push(GeneratedImage {
            text: None,
            images: vec![InlineImage {
                bytes,
                mime_type: mime_type.to_string(),
            }],
        });
        self
    }

    pub fn with_response(self, response: GeneratedImage) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn call_count(&self) -> usize {
        self.received_prompts.lock().unwrap().len()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate(&self, prompt: &Prompt) -> Result<GeneratedImage> {
        let mut received = self.received_prompts.lock().unwrap();
        received.push(prompt.as_str().to_string());
        let count = received.len();

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Tiny valid PNG as a default stand-in.
            Ok(GeneratedImage {
                text: None,
                images: vec![InlineImage {
                    bytes: vec![
                        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
                        0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01,
                        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00,
                        0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0x99, 0x63, 0xF8, 0xCF, 0xC0, 0x00,
                        0x00, 0x00, 0x01, 0x00, 0x01, 0xE2, 0x25, 0x00, 0xBC, 0x00, 0x00, 0x00,
                        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
                    ],
                    mime_type: "image/png".to_string(),
                }],
            })
        } else {
            Ok(responses[(count - 1) % responses.len()].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_chat_default_echoes_prompt() {
        let client = MockChatClient::new();
        let prompt = Prompt::parse("hello there").unwrap();

        let reply = client.send(&prompt).await.unwrap();
        assert!(reply.contains("hello there"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_chat_cycles_scripted_replies() {
        let client = MockChatClient::new()
            .with_reply("first".to_string())
            .with_reply("second".to_string());
        let prompt = Prompt::parse("x").unwrap();

        assert_eq!(client.send(&prompt).await.unwrap(), "first");
        assert_eq!(client.send(&prompt).await.unwrap(), "second");
        assert_eq!(client.send(&prompt).await.unwrap(), "first");
    }

    #[tokio::test]
    async fn test_mock_image_default_returns_png() {
        let client = MockImageClient::new();
        let prompt = Prompt::parse("a cat").unwrap();

        let generated = client.generate(&prompt).await.unwrap();
        let primary = generated.primary().unwrap();
        assert_eq!(primary.mime_type, "image/png");
        assert_eq!(&primary.bytes[..4], &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    async fn test_mock_image_scripted_response() {
        let client = MockImageClient::new().with_image(vec![0x01, 0x02], "image/webp");
        let prompt = Prompt::parse("a cat").unwrap();

        let generated = client.generate(&prompt).await.unwrap();
        let primary = generated.primary().unwrap();
        assert_eq!(primary.bytes, vec![0x01, 0x02]);
        assert_eq!(primary.mime_type, "image/webp");
    }
}
