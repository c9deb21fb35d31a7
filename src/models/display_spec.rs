//! Target display characteristics.
//!
//! One supported panel: a 7.3" 7-color e-ink photo frame, 800x480 native.
//! Portrait mounting swaps the axes.

/// Canvas size when the panel is mounted landscape.
pub const LANDSCAPE_CANVAS: (u32, u32) = (800, 480);

/// Canvas size when the panel is mounted portrait.
pub const PORTRAIT_CANVAS: (u32, u32) = (480, 800);

/// The panel's fixed 7-color palette, in firmware index order:
/// black, white, green, blue, red, yellow, orange.
///
/// The firmware expects 24-bit BMPs whose pixels take only these values;
/// it re-derives palette indices on the device.
pub const DEVICE_PALETTE: [[u8; 3]; 7] = [
    [0, 0, 0],
    [255, 255, 255],
    [0, 255, 0],
    [0, 0, 255],
    [255, 0, 0],
    [255, 255, 0],
    [255, 128, 0],
];
