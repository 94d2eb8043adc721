//! Image references: encoding captured photos as data URLs and splitting
//! them back into the inline payload sent for classification.

use crate::llm::InlineImage;
use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Read an image file and encode it as `data:<mime>;base64,<payload>`.
pub fn encode_image_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read image: {}", path.display()))?;
    if bytes.is_empty() {
        bail!("Image file is empty: {}", path.display());
    }
    Ok(encode_image_bytes(&bytes))
}

pub fn encode_image_bytes(bytes: &[u8]) -> String {
    let mime = infer::get(bytes)
        .map(|kind| kind.mime_type())
        .filter(|mime| mime.starts_with("image/"))
        .unwrap_or(DEFAULT_IMAGE_MIME);
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Split a stored image reference into MIME type and bare base64 payload.
///
/// Accepts a `data:` URL or a raw base64 string (assumed JPEG).
pub fn inline_image(reference: &str) -> InlineImage {
    if let Some(rest) = reference.strip_prefix("data:")
        && let Some((header, payload)) = rest.split_once(',')
    {
        let mime = header
            .strip_suffix(";base64")
            .unwrap_or(header)
            .split(';')
            .next()
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_IMAGE_MIME);
        return InlineImage {
            mime_type: mime.to_string(),
            data: payload.to_string(),
        };
    }

    InlineImage {
        mime_type: DEFAULT_IMAGE_MIME.to_string(),
        data: reference.to_string(),
    }
}
