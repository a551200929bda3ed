//! Binary media adaptation
//!
//! Turns decoded image bytes into a displayable temp-file resource (the
//! non-browser analogue of a blob URL) and copies them losslessly to a
//! user-chosen download destination. The temp file lives exactly as long
//! as the [`MediaResource`]; dropping or replacing it deletes the file.

use crate::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DOWNLOAD_BASENAME: &str = "gemini-generated-image";

/// Sniffs an image MIME type from magic bytes, falling back to `image/png`.
pub fn detect_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "image/png",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "image/webp",
        _ => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?}), falling back to image/png",
                &bytes[..bytes.len().min(4)]
            );
            "image/png"
        }
    }
}

fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => ".jpg",
        "image/webp" => ".webp",
        _ => ".png",
    }
}

/// A displayable handle over decoded image bytes, backed by a named temp
/// file that is removed when the resource is dropped.
#[derive(Debug)]
pub struct MediaResource {
    file: NamedTempFile,
    mime_type: String,
    len: u64,
}

impl MediaResource {
    /// Writes the bytes to a fresh temp file with a mime-derived suffix.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("gemini-studio-")
            .suffix(extension_for(mime_type))
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        tracing::debug!(
            "Staged {} byte {} resource at {}",
            bytes.len(),
            mime_type,
            file.path().display()
        );

        Ok(Self {
            file,
            mime_type: mime_type.to_string(),
            len: bytes.len() as u64,
        })
    }

    /// Path of the backing temp file, valid for the lifetime of `self`.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed download filename, extension matched to the MIME type.
    pub fn default_filename(&self) -> String {
        format!("{}{}", DOWNLOAD_BASENAME, extension_for(&self.mime_type))
    }

    /// Copies the bytes to `dest` unchanged and returns the written path.
    pub fn save_to(&self, dest: &Path) -> Result<PathBuf> {
        fs::copy(self.path(), dest)?;
        Ok(dest.to_path_buf())
    }

    /// Saves into `dir` under [`Self::default_filename`].
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        self.save_to(&dir.join(self.default_filename()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        assert_eq!(
            detect_image_mime(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]),
            "image/png"
        );
    }

    #[test]
    fn test_detect_jpeg() {
        assert_eq!(detect_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
    }

    #[test]
    fn test_detect_webp() {
        assert_eq!(
            detect_image_mime(&[
                0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50
            ]),
            "image/webp"
        );
    }

    #[test]
    fn test_unknown_falls_back_to_png() {
        assert_eq!(detect_image_mime(&[0x00, 0x01, 0x02, 0x03]), "image/png");
    }

    #[test]
    fn test_empty_falls_back_to_png() {
        assert_eq!(detect_image_mime(&[]), "image/png");
    }

    #[test]
    fn test_resource_holds_bytes_while_alive() {
        let bytes = vec![0xDE, 0xAD, 0xBE, 0xEF];
        let resource = MediaResource::from_bytes(&bytes, "image/png").unwrap();

        assert!(resource.path().exists());
        assert_eq!(fs::read(resource.path()).unwrap(), bytes);
        assert_eq!(resource.len(), 4);
    }

    #[test]
    fn test_resource_is_released_on_drop() {
        let resource = MediaResource::from_bytes(&[0x01], "image/png").unwrap();
        let path = resource.path().to_path_buf();
        assert!(path.exists());

        drop(resource);
        assert!(!path.exists());
    }

    #[test]
    fn test_save_to_is_lossless_passthrough() {
        let bytes: Vec<u8> = (0..=255).collect();
        let resource = MediaResource::from_bytes(&bytes, "image/png").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.png");
        resource.save_to(&dest).unwrap();

        assert_eq!(fs::read(&dest).unwrap(), bytes);
    }

    #[test]
    fn test_default_filename_tracks_mime_type() {
        let png = MediaResource::from_bytes(&[0x01], "image/png").unwrap();
        assert_eq!(png.default_filename(), "gemini-generated-image.png");

        let jpeg = MediaResource::from_bytes(&[0x01], "image/jpeg").unwrap();
        assert_eq!(jpeg.default_filename(), "gemini-generated-image.jpg");
    }

    #[test]
    fn test_temp_file_suffix_matches_mime() {
        let webp = MediaResource::from_bytes(&[0x01], "image/webp").unwrap();
        assert!(webp.path().to_string_lossy().ends_with(".webp"));
    }
}
