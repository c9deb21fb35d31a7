use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use eink_quantize::DitherMode;

/// Requested canvas orientation.
///
/// `Auto` picks the canvas from the source shape (landscape when width
/// exceeds height). The CLI never produces `Auto` — its `--orient` flag
/// defaults to `portrait` — but the pipeline API accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Orientation {
    Landscape,
    Portrait,
    #[value(skip)]
    Auto,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Landscape => write!(f, "landscape"),
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Auto => write!(f, "auto"),
        }
    }
}

/// Conversion settings, built once from the CLI and passed down.
///
/// No global state: the batch driver and pipeline take this by reference.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Input image file or directory of images.
    pub input: PathBuf,

    /// Requested canvas orientation. Also keys the output suffix: the
    /// `.6b8.bmp` name is tied to this flag being `Landscape`, not to the
    /// canvas shape the planner ends up choosing.
    pub orientation: Orientation,

    /// Quantization dithering mode.
    pub dither: DitherMode,

    /// Print one diagnostic line per converted file.
    pub verbose: bool,
}
