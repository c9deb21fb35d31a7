//! The single-file conversion pipeline.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use eink_quantize::{quantize, Palette};
use tracing::debug;

use crate::error::ConvertError;
use crate::models::display_spec::DEVICE_PALETTE;
use crate::models::{ConvertConfig, Orientation};

use super::{compose, decode, geometry};

static PALETTE: LazyLock<Palette> =
    LazyLock::new(|| Palette::new(&DEVICE_PALETTE).expect("device palette is valid"));

/// Convert one image file and save the BMP next to it.
///
/// Runs the full pipeline: existence check, image validation, decode,
/// geometry planning, compositing, palette quantization, save. Returns the
/// output path on success.
///
/// # Errors
///
/// Any stage failure is returned as a [`ConvertError`]; callers treat all of
/// them as fatal for this file only.
pub fn convert_file(path: &Path, config: &ConvertConfig) -> Result<PathBuf, ConvertError> {
    if !path.is_file() {
        return Err(ConvertError::MissingInput(path.to_path_buf()));
    }
    if !decode::validate(path) {
        return Err(ConvertError::InvalidImage(path.to_path_buf()));
    }

    let source = decode::decode(path)?;
    let (width, height) = source.dimensions();
    let plan = geometry::plan(width, height, config.orientation)?;

    if config.verbose {
        println!(
            "{} {} by {} ({:.3}), Output BMP {} by {}, ({:.3})",
            path.display(),
            width,
            height,
            f64::from(height) / f64::from(width),
            plan.target_width,
            plan.target_height,
            f64::from(plan.target_height) / f64::from(plan.target_width),
        );
    }

    let canvas = compose::compose(&source, &plan);
    let quantized = quantize(&canvas, &PALETTE, config.dither);

    let output = output_path(path, config.orientation);
    quantized.save(&output).map_err(|source| ConvertError::Encode {
        path: output.clone(),
        source,
    })?;

    debug!(input = %path.display(), output = %output.display(), "converted");
    Ok(output)
}

/// Derive the output file name from the input.
///
/// The input's extension is replaced with `8b6.bmp`, or `6b8.bmp` when the
/// orientation flag is `landscape`. The suffix is keyed to the flag value,
/// not to the canvas shape the planner picked: an auto-selected landscape
/// canvas still gets the `8b6` name. Firmware on the frame matches files by
/// these suffixes, so the quirk is load-bearing.
pub fn output_path(input: &Path, orientation: Orientation) -> PathBuf {
    let suffix = match orientation {
        Orientation::Landscape => "6b8.bmp",
        Orientation::Portrait | Orientation::Auto => "8b6.bmp",
    };
    input.with_extension(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eink_quantize::DitherMode;
    use pretty_assertions::assert_eq;

    fn config(orientation: Orientation) -> ConvertConfig {
        ConvertConfig {
            input: PathBuf::new(),
            orientation,
            dither: DitherMode::FloydSteinberg,
            verbose: false,
        }
    }

    #[test]
    fn test_output_name_portrait() {
        assert_eq!(
            output_path(Path::new("pics/photo.jpg"), Orientation::Portrait),
            PathBuf::from("pics/photo.8b6.bmp")
        );
    }

    #[test]
    fn test_output_name_landscape_flag() {
        assert_eq!(
            output_path(Path::new("photo.jpeg"), Orientation::Landscape),
            PathBuf::from("photo.6b8.bmp")
        );
    }

    #[test]
    fn test_output_name_auto_uses_portrait_suffix() {
        // The suffix follows the flag, never the computed canvas shape.
        assert_eq!(
            output_path(Path::new("wide.png"), Orientation::Auto),
            PathBuf::from("wide.8b6.bmp")
        );
    }

    #[test]
    fn test_output_name_without_extension() {
        assert_eq!(
            output_path(Path::new("photo"), Orientation::Portrait),
            PathBuf::from("photo.8b6.bmp")
        );
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = convert_file(Path::new("nope.png"), &config(Orientation::Portrait)).unwrap_err();
        assert!(matches!(err, ConvertError::MissingInput(_)));
    }

    #[test]
    fn test_invalid_image_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = convert_file(&path, &config(Orientation::Portrait)).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidImage(_)));
    }
}
