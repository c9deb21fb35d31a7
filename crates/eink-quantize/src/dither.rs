//! Palette quantization with optional error diffusion.

use image::{Rgb, RgbImage};

use crate::kernel::{Kernel, FLOYD_STEINBERG};
use crate::palette::Palette;

/// Dithering mode for [`quantize`].
///
/// Only these two modes exist; the conversion pipeline this crate serves
/// accepts nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMode {
    /// Direct nearest-color mapping, no error propagation between pixels.
    None,

    /// Floyd-Steinberg error diffusion (100% propagation, 4 neighbors).
    #[default]
    FloydSteinberg,
}

impl std::fmt::Display for DitherMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DitherMode::None => write!(f, "none"),
            DitherMode::FloydSteinberg => write!(f, "floyd-steinberg"),
        }
    }
}

/// Quantize an RGB image onto a fixed palette.
///
/// Every output pixel is one of the palette entries, re-expanded to 24-bit
/// RGB. With [`DitherMode::FloydSteinberg`], quantization error diffuses to
/// unprocessed neighbors in raster order (left to right, top to bottom, no
/// serpentine), with per-channel accumulation clamped to the 0..=255 range
/// before matching.
///
/// The operation is a pure function of its inputs: no randomness, no
/// ordering dependence beyond the raster scan.
///
/// # Example
///
/// ```
/// use eink_quantize::{quantize, DitherMode, Palette};
/// use image::RgbImage;
///
/// let palette = Palette::new(&[[0, 0, 0], [255, 255, 255]]).unwrap();
/// let img = RgbImage::from_pixel(2, 2, image::Rgb([30, 30, 30]));
///
/// let out = quantize(&img, &palette, DitherMode::None);
/// assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));
/// ```
pub fn quantize(img: &RgbImage, palette: &Palette, mode: DitherMode) -> RgbImage {
    match mode {
        DitherMode::None => nearest_map(img, palette),
        DitherMode::FloydSteinberg => diffuse(img, palette, &FLOYD_STEINBERG),
    }
}

/// Per-pixel nearest-color mapping.
fn nearest_map(img: &RgbImage, palette: &Palette) -> RgbImage {
    let mut out = RgbImage::new(img.width(), img.height());
    for (src, dst) in img.pixels().zip(out.pixels_mut()) {
        *dst = Rgb(palette.nearest_color(src.0));
    }
    out
}

/// Kernel-driven error diffusion over an i16 working buffer.
///
/// i16 is wide enough: accumulated error per channel stays well inside
/// +/- a few hundred with a 100%-propagation kernel.
fn diffuse(img: &RgbImage, palette: &Palette, kernel: &Kernel) -> RgbImage {
    let (width, height) = img.dimensions();
    let w = width as usize;
    let h = height as usize;

    let mut buffer: Vec<i16> = img.as_raw().iter().map(|&v| i16::from(v)).collect();
    let mut out = RgbImage::new(width, height);

    let divisor = i16::from(kernel.divisor);

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) * 3;
            let old = [
                buffer[idx].clamp(0, 255) as u8,
                buffer[idx + 1].clamp(0, 255) as u8,
                buffer[idx + 2].clamp(0, 255) as u8,
            ];
            let new = palette.nearest_color(old);
            out.put_pixel(x as u32, y as u32, Rgb(new));

            let error = [
                i16::from(old[0]) - i16::from(new[0]),
                i16::from(old[1]) - i16::from(new[1]),
                i16::from(old[2]) - i16::from(new[2]),
            ];

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + i64::from(dx);
                let ny = y as i64 + i64::from(dy);
                if nx < 0 || nx >= w as i64 || ny >= h as i64 {
                    continue;
                }
                let nidx = (ny as usize * w + nx as usize) * 3;
                let weight = i16::from(weight);
                for c in 0..3 {
                    buffer[nidx + c] += error[c] * weight / divisor;
                }
            }
        }
    }

    out
}
