//! Response interpretation for `generateContent` payloads.
//!
//! Classifies a raw JSON body from a successful exchange into text, decoded
//! image media, or a well-typed error. Transport failures never reach this
//! module; the HTTP client maps them before interpretation.

use super::types::{GenerateContentResponse, Part};
use crate::media::detect_image_mime;
use crate::{Error, Result};
use base64::Engine as _;

/// A decoded inline image from the response, in part order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Classified outcome of a `generateContent` exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpreted {
    /// Text-only response.
    Text { text: String },
    /// At least one decoded image, with any accompanying text. Images are
    /// kept in response order; the last one is the current display image.
    Image {
        text: Option<String>,
        images: Vec<InlineImage>,
    },
}

/// Interprets a raw `generateContent` JSON body.
///
/// Walks the first candidate's parts in order. Later text parts replace
/// earlier ones; every inline-data part is base64-decoded and retained.
pub fn interpret(raw: serde_json::Value) -> Result<Interpreted> {
    let response: GenerateContentResponse = serde_json::from_value(raw).map_err(|e| {
        Error::UnexpectedFormat(format!("malformed generateContent envelope: {}", e))
    })?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::UnexpectedFormat("no candidates in response".to_string()))?;

    let parts = candidate
        .content
        .and_then(|c| c.parts)
        .ok_or_else(|| Error::UnexpectedFormat("candidate has no content parts".to_string()))?;

    let mut text: Option<String> = None;
    let mut images: Vec<InlineImage> = Vec::new();

    for part in parts {
        match part {
            Part::Text { text: t } => {
                text = Some(t);
            }
            Part::InlineData { inline_data } => {
                let bytes =
                    base64::engine::general_purpose::STANDARD.decode(inline_data.data.as_bytes())?;
                let mime_type = match inline_data.mime_type {
                    Some(mime) if !mime.trim().is_empty() => mime,
                    _ => detect_image_mime(&bytes).to_string(),
                };
                images.push(InlineImage { bytes, mime_type });
            }
            Part::Other(value) => {
                tracing::debug!("Skipping unrecognized response part: {}", value);
            }
        }
    }

    if !images.is_empty() {
        tracing::debug!(
            "Interpreted {} inline image(s), accompanying text: {}",
            images.len(),
            text.is_some()
        );
        Ok(Interpreted::Image { text, images })
    } else if let Some(text) = text {
        Ok(Interpreted::Text { text })
    } else {
        Err(Error::EmptyResponse)
    }
}
