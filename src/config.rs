//! Environment-backed configuration
//!
//! The API key and model IDs are read once at startup and threaded into the
//! clients explicitly. A missing or empty key fails here, before anything
//! touches the network.

use crate::{Error, Result};
use std::time::Duration;

const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub chat_model: String,
    pub image_model: String,
    pub chat_timeout: Duration,
    pub image_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| Error::Validation("GEMINI_API_KEY not set".to_string()))?;

        let chat_timeout = parse_timeout_secs("GEMINI_CHAT_TIMEOUT_SECS")?
            .unwrap_or(Duration::from_secs(DEFAULT_CHAT_TIMEOUT_SECS));
        let image_timeout = parse_timeout_secs("GEMINI_IMAGE_TIMEOUT_SECS")?
            .unwrap_or(Duration::from_secs(DEFAULT_IMAGE_TIMEOUT_SECS));

        Self::new(
            api_key,
            std::env::var("GEMINI_CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string()),
            std::env::var("GEMINI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            chat_timeout,
            image_timeout,
        )
    }

    pub fn new(
        api_key: String,
        chat_model: String,
        image_model: String,
        chat_timeout: Duration,
        image_timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(Error::Validation(
                "GEMINI_API_KEY is empty; set it before making requests".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            chat_model,
            image_model,
            chat_timeout,
            image_timeout,
        })
    }
}

fn parse_timeout_secs(var: &str) -> Result<Option<Duration>> {
    match std::env::var(var) {
        Ok(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| Error::Validation(format!("{} must be a positive integer", var)))?;
            if secs == 0 {
                return Err(Error::Validation(format!(
                    "{} must be a positive integer",
                    var
                )));
            }
            Ok(Some(Duration::from_secs(secs)))
        }
        Err(_) => Ok(None),
    }
}
