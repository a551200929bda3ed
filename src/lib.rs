//! Core pipelines for a Gemini chat and image-generation front end
//!
//! Implements the two request/response pipelines behind a prompt-driven UI:
//! text chat completion and text-to-image generation against the Gemini
//! `generateContent` API, plus the media handling needed to display and
//! download returned images.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod session;

pub use error::{Error, Result};
