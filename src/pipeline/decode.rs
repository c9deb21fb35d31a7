//! Image validation and decoding.

use std::path::Path;

use image::{ImageReader, RgbImage};
use tracing::debug;

use crate::error::ConvertError;

/// Check that `path` decodes as a well-formed image.
///
/// Probes the file header only (no full pixel decode) and swallows every
/// failure mode into `false`: corrupt files, unknown formats, zero-byte
/// files, unreadable paths. Zero-dimension images are rejected here too,
/// since the geometry planner cannot scale them.
pub fn validate(path: &Path) -> bool {
    let reader = match ImageReader::open(path) {
        Ok(r) => r,
        Err(e) => {
            debug!(path = %path.display(), %e, "cannot open for validation");
            return false;
        }
    };
    let reader = match reader.with_guessed_format() {
        Ok(r) => r,
        Err(e) => {
            debug!(path = %path.display(), %e, "cannot probe format");
            return false;
        }
    };
    match reader.into_dimensions() {
        Ok((w, h)) => w > 0 && h > 0,
        Err(e) => {
            debug!(path = %path.display(), %e, "not a valid image");
            false
        }
    }
}

/// Decode `path` into an 8-bit RGB buffer.
pub fn decode(path: &Path) -> Result<RgbImage, ConvertError> {
    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(ConvertError::Decode)?;
    Ok(img.to_rgb8())
}
