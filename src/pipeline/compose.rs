//! Resize and center onto the target canvas.

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};

use super::geometry::GeometryPlan;

/// White canvas background.
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Resize `source` per the plan and paste it centered onto a white canvas.
///
/// The canvas is exactly `target_width x target_height`. Cover scaling means
/// the resized image overhangs the canvas on the non-limiting axis; the
/// overhang is cropped symmetrically by the negative paste offset. The
/// source is untouched.
pub fn compose(source: &RgbImage, plan: &GeometryPlan) -> RgbImage {
    let resized = imageops::resize(
        source,
        plan.resized_width,
        plan.resized_height,
        FilterType::CatmullRom,
    );

    let mut canvas = RgbImage::from_pixel(plan.target_width, plan.target_height, BACKGROUND);
    let (left, top) = paste_offsets(plan);
    imageops::overlay(&mut canvas, &resized, left, top);
    canvas
}

/// Centered paste offsets, floor division.
///
/// With cover scaling these are always <= 0 (the resized image is at least
/// canvas-sized), and `overlay` clips the overhang. Floor semantics matter
/// for odd differences: -3 / 2 must give -2, not -1.
pub fn paste_offsets(plan: &GeometryPlan) -> (i64, i64) {
    let left = (i64::from(plan.target_width) - i64::from(plan.resized_width)).div_euclid(2);
    let top = (i64::from(plan.target_height) - i64::from(plan.resized_height)).div_euclid(2);
    (left, top)
}
