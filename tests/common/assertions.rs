//! Shared assertions over converted output files.

use std::path::Path;

use image::RgbImage;
use inkframe::models::display_spec::DEVICE_PALETTE;

/// Decode an output BMP back into an RGB buffer.
pub fn load_output(path: &Path) -> RgbImage {
    assert!(path.exists(), "expected output file {}", path.display());
    image::open(path)
        .unwrap_or_else(|e| panic!("output {} should decode: {e}", path.display()))
        .to_rgb8()
}

/// Assert the output has one of the two legal canvas shapes.
pub fn assert_canvas_dimensions(img: &RgbImage) {
    let dims = img.dimensions();
    assert!(
        dims == (800, 480) || dims == (480, 800),
        "canvas must be 800x480 or 480x800, got {dims:?}"
    );
}

/// Assert every pixel is one of the 7 device palette colors.
pub fn assert_palette_only(img: &RgbImage) {
    for (x, y, p) in img.enumerate_pixels() {
        assert!(
            DEVICE_PALETTE.contains(&p.0),
            "pixel at ({x},{y}) is {:?}, not a palette color",
            p.0
        );
    }
}
