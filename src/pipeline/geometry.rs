//! Canvas selection and cover scaling.

use crate::error::ConvertError;
use crate::models::display_spec::{LANDSCAPE_CANVAS, PORTRAIT_CANVAS};
use crate::models::Orientation;

/// The geometry computed for one source image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryPlan {
    /// Canvas width, always 800 or 480.
    pub target_width: u32,
    /// Canvas height, always 480 or 800.
    pub target_height: u32,
    /// Cover scale factor applied to the source.
    pub scale: f64,
    /// Source width after scaling (fraction truncated, not rounded).
    pub resized_width: u32,
    /// Source height after scaling (fraction truncated, not rounded).
    pub resized_height: u32,
}

/// Compute the target canvas and cover scale for a source image.
///
/// Explicit orientations map straight to the fixed canvas sizes; `Auto`
/// picks the landscape canvas when the source is wider than tall. The scale
/// is `max(target_width / width, target_height / height)`, so the scaled
/// source is never smaller than the canvas on either axis. Scaled dimensions
/// truncate toward zero, matching integer-cast semantics.
///
/// # Errors
///
/// Returns [`ConvertError::ZeroDimension`] for zero-width or zero-height
/// sources; the scale would be a division by zero. The validator upstream
/// already rejects these, this is the second line of defense.
pub fn plan(
    width: u32,
    height: u32,
    orientation: Orientation,
) -> Result<GeometryPlan, ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::ZeroDimension { width, height });
    }

    let (target_width, target_height) = match orientation {
        Orientation::Landscape => LANDSCAPE_CANVAS,
        Orientation::Portrait => PORTRAIT_CANVAS,
        Orientation::Auto => {
            if width > height {
                LANDSCAPE_CANVAS
            } else {
                PORTRAIT_CANVAS
            }
        }
    };

    let scale = f64::max(
        f64::from(target_width) / f64::from(width),
        f64::from(target_height) / f64::from(height),
    );

    Ok(GeometryPlan {
        target_width,
        target_height,
        scale,
        resized_width: (f64::from(width) * scale) as u32,
        resized_height: (f64::from(height) * scale) as u32,
    })
}
