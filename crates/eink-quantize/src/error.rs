//! Error types for palette construction.

use thiserror::Error;

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No colors provided.
    #[error("palette must contain at least one color")]
    Empty,

    /// More entries than an indexed format can address.
    #[error("palette has {count} colors (max 256)")]
    TooManyColors {
        /// Number of colors that were provided.
        count: usize,
    },
}
