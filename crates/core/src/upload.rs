//! Decoding of uploaded skin images.

use base64::Engine;
use image::GenericImageView;

use crate::{DermError, DermResult};

/// An uploaded image that decoded as base64 and parsed as an image container.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl DecodedImage {
    /// The original encoded bytes (JPEG, PNG, ...).
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Decodes a base64 payload into a validated image.
///
/// Accepts raw base64 as well as `data:image/...;base64,` URLs. ASCII
/// whitespace inside the payload is ignored, so line-wrapped base64 decodes.
///
/// # Errors
///
/// Returns `DermError::InvalidImage` if the payload is not valid base64 or the
/// decoded bytes are not a supported image.
pub fn decode_image(image_base64: &str) -> DermResult<DecodedImage> {
    let payload = match image_base64.split_once(',') {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => image_base64,
    };

    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| DermError::InvalidImage(e.to_string()))?;

    let img = image::load_from_memory(&bytes).map_err(|e| DermError::InvalidImage(e.to_string()))?;

    let (width, height) = img.dimensions();
    Ok(DecodedImage {
        bytes,
        width,
        height,
    })
}
