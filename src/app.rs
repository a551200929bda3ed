//! Application orchestration: wires configuration into concrete clients and
//! drives the two sessions for the CLI front end.

use crate::api::{ChatService, GeminiChatClient, GeminiImageClient, ImageGenerationService};
use crate::config::Config;
use crate::session::{ChatSession, ImageSession};
use crate::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

pub struct App {
    chat: ChatSession,
    image: ImageSession,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_services(
            Box::new(GeminiChatClient::new(config)),
            Box::new(GeminiImageClient::new(config)),
        )
    }

    /// Build an app from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses
    /// that need to inject mocks.
    pub fn with_services(
        chat: Box<dyn ChatService>,
        image: Box<dyn ImageGenerationService>,
    ) -> Self {
        Self {
            chat: ChatSession::new(chat),
            image: ImageSession::new(image),
        }
    }

    pub fn chat_session(&self) -> &ChatSession {
        &self.chat
    }

    pub fn image_session(&self) -> &ImageSession {
        &self.image
    }

    /// One-shot chat exchange. Prints the reply and keeps it in history.
    pub async fn chat_once(&mut self, raw_input: &str) -> Result<()> {
        let exchange = self.chat.ask(raw_input).await?;
        println!("{}", exchange.reply);
        Ok(())
    }

    /// Interactive chat loop over stdin. Errors are printed and the loop
    /// stays usable; an empty line or EOF ends the session.
    pub async fn chat_interactive(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => break,
            };
            if line.trim().is_empty() {
                break;
            }

            match self.chat.ask(&line).await.map(|e| e.reply.clone()) {
                Ok(reply) => println!("[{}] {}", self.chat.history().len(), reply),
                Err(e) => eprintln!("Error: {}", e),
            }
        }

        info!(
            "Chat session ended after {} exchange(s)",
            self.chat.history().len()
        );
        Ok(())
    }

    /// One image generation: prints any accompanying text and saves the
    /// image to `out`, or to the default filename in the working directory.
    pub async fn image_once(&mut self, raw_input: &str, out: Option<PathBuf>) -> Result<()> {
        let outcome = self.image.generate(raw_input).await?;

        if let Some(text) = &outcome.text {
            println!("{}", text);
        }

        match &outcome.resource {
            Some(resource) => {
                let written = match out {
                    Some(path) => resource.save_to(&path)?,
                    None => resource.save_to_dir(&std::env::current_dir()?)?,
                };
                info!(
                    "Saved {} byte {} image to {}",
                    resource.len(),
                    resource.mime_type(),
                    written.display()
                );
                println!("Saved image to {}", written.display());
            }
            None => println!("No image was returned for this prompt."),
        }

        Ok(())
    }
}
