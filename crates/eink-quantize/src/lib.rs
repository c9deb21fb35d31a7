//! eink-quantize: Fixed-palette quantization for e-ink displays
//!
//! This library maps full-color images onto the small fixed palettes used by
//! color e-ink panels, with optional Floyd-Steinberg error diffusion. It is
//! the core of a photo-frame conversion pipeline: the caller hands in a
//! composited RGB image, the library hands back an RGB image whose pixel
//! values are drawn from exactly the palette entries.
//!
//! # Quick Start
//!
//! ```
//! use eink_quantize::{quantize, DitherMode, Palette};
//! use image::RgbImage;
//!
//! let palette = Palette::new(&[[0, 0, 0], [255, 255, 255]]).unwrap();
//! let img = RgbImage::from_pixel(4, 4, image::Rgb([128, 128, 128]));
//!
//! let out = quantize(&img, &palette, DitherMode::FloydSteinberg);
//! assert_eq!(out.dimensions(), (4, 4));
//! ```
//!
//! # Why RGB in, RGB out
//!
//! E-ink photo-frame firmware typically expects 24-bit RGB bitmap files whose
//! pixel values are restricted to the panel's color set; it re-derives the
//! palette index on the device. The library therefore never exposes an
//! indexed buffer: the round trip through the palette and back to RGB is the
//! contract.
//!
//! # Determinism
//!
//! Error diffusion runs in plain raster order with integer arithmetic and no
//! noise injection, so quantizing the same input with the same palette and
//! mode always produces byte-identical output.

mod dither;
mod error;
mod kernel;
mod palette;

pub use dither::{quantize, DitherMode};
pub use error::PaletteError;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use palette::Palette;
