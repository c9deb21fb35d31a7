//! Image fixtures written into temp directories.

use std::path::{Path, PathBuf};

use eink_quantize::DitherMode;
use image::{Rgb, RgbImage};
use inkframe::models::{ConvertConfig, Orientation};

/// A gradient image with plenty of off-palette colors, saved as PNG.
pub fn write_photo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            120,
        ])
    });
    let path = dir.join(name);
    img.save(&path).expect("fixture save");
    path
}

/// A file that is not an image at all.
pub fn write_invalid(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"definitely not pixels").expect("fixture write");
    path
}

/// Default conversion config for a given input path.
pub fn config(input: PathBuf) -> ConvertConfig {
    ConvertConfig {
        input,
        orientation: Orientation::Portrait,
        dither: DitherMode::FloydSteinberg,
        verbose: false,
    }
}

/// Conversion config with an explicit orientation.
pub fn config_with_orientation(input: PathBuf, orientation: Orientation) -> ConvertConfig {
    ConvertConfig {
        orientation,
        ..config(input)
    }
}
