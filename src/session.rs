//! Per-session state for the two pipelines.
//!
//! [`ChatSession`] owns the append-only conversation history;
//! [`ImageSession`] owns the single current media resource, releasing the
//! previous one when a new result is installed. Both take `&mut self` for a
//! call, so at most one exchange per session is in flight.

use crate::api::{ChatService, ImageGenerationService, Prompt};
use crate::media::MediaResource;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// One completed chat exchange, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub prompt: String,
    pub reply: String,
}

/// A chat session with an append-only history of completed exchanges.
///
/// History is never reordered or truncated; it is discarded with the
/// session. A failed call leaves it untouched.
pub struct ChatSession {
    client: Box<dyn ChatService>,
    history: Vec<Exchange>,
}

impl ChatSession {
    pub fn new(client: Box<dyn ChatService>) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    /// Validates the raw input, runs one exchange, and appends it to the
    /// history. Whitespace-only input fails before any network call.
    pub async fn ask(&mut self, raw_input: &str) -> Result<&Exchange> {
        let prompt = Prompt::parse(raw_input)?;
        let reply = self.client.send(&prompt).await?;

        self.history.push(Exchange {
            prompt: prompt.as_str().to_string(),
            reply,
        });
        // Just pushed, so the history is non-empty.
        Ok(&self.history[self.history.len() - 1])
    }

    pub fn history(&self) -> &[Exchange] {
        &self.history
    }
}

/// The image pipeline's current result: accompanying text, if any, and the
/// staged media resource when the model returned an image.
#[derive(Debug)]
pub struct ImageOutcome {
    pub text: Option<String>,
    pub resource: Option<MediaResource>,
}

/// An image session holding at most one current result.
///
/// Installing a new result drops the previous [`MediaResource`], deleting
/// its temp file, so repeated generations never accumulate files.
pub struct ImageSession {
    client: Box<dyn ImageGenerationService>,
    current: Option<ImageOutcome>,
}

impl ImageSession {
    pub fn new(client: Box<dyn ImageGenerationService>) -> Self {
        Self {
            client,
            current: None,
        }
    }

    /// Validates the raw input, runs one generation, and replaces the
    /// current result. On failure the previous result is left untouched.
    pub async fn generate(&mut self, raw_input: &str) -> Result<&ImageOutcome> {
        let prompt = Prompt::parse(raw_input)?;
        let generated = self.client.generate(&prompt).await?;

        let resource = match generated.primary() {
            Some(image) => Some(MediaResource::from_bytes(&image.bytes, &image.mime_type)?),
            None => None,
        };

        Ok(self.current.insert(ImageOutcome {
            text: generated.text,
            resource,
        }))
    }

    pub fn current(&self) -> Option<&ImageOutcome> {
        self.current.as_ref()
    }

    /// Downloads the current image into `dir` under its default filename.
    pub fn download(&self, dir: &Path) -> Result<PathBuf> {
        let resource = self
            .current
            .as_ref()
            .and_then(|outcome| outcome.resource.as_ref())
            .ok_or_else(|| Error::Validation("No generated image to download".to_string()))?;
        resource.save_to_dir(dir)
    }
}
