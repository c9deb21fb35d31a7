use std::path::PathBuf;
use thiserror::Error;

/// Per-file conversion failures.
///
/// Every variant is contained at the file level: the batch driver logs the
/// failure, counts the file as not converted, and moves on.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("file {} does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error("file {} is not a valid image", .0.display())]
    InvalidImage(PathBuf),

    #[error("image has zero dimension: {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("decode error: {0}")]
    Decode(image::ImageError),

    #[error("failed to write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
