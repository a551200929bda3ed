//! Chat-completion pipeline facade.

use super::client::GeminiHttpClient;
use super::interpret::{interpret, Interpreted};
use super::request::{build_chat_request, Endpoint};
use super::types::Prompt;
use super::ChatService;
use crate::config::Config;
use crate::{Error, Result};
use async_trait::async_trait;

pub struct GeminiChatClient {
    http: GeminiHttpClient,
}

impl GeminiChatClient {
    pub fn new(config: &Config) -> Self {
        Self::new_with_client(config, reqwest::Client::new())
    }

    pub fn new_with_client(config: &Config, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                config.api_key.clone(),
                Endpoint::Chat.model(config).to_string(),
                Endpoint::Chat.timeout(config),
                client,
            ),
        }
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiChatClient);

#[async_trait]
impl ChatService for GeminiChatClient {
    async fn send(&self, prompt: &Prompt) -> Result<String> {
        let request = build_chat_request(prompt);
        let raw = self.http.dispatch(&request).await?;

        match interpret(raw)? {
            Interpreted::Text { text } => Ok(text),
            // An image reply to a chat prompt is unexpected but its text,
            // if any, is still the user-visible answer.
            Interpreted::Image { text: Some(text), .. } => Ok(text),
            Interpreted::Image { text: None, .. } => Err(Error::EmptyResponse),
        }
    }
}
