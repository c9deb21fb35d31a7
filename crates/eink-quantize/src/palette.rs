//! Palette type with nearest-color matching.

use crate::error::PaletteError;

/// Indexed-color formats cap out at one byte per pixel.
const MAX_COLORS: usize = 256;

/// A fixed, ordered color palette.
///
/// Stores sRGB triples and answers nearest-color queries using squared
/// Euclidean distance in sRGB. That is the standard metric of classic
/// palette quantizers and what error diffusion expects: distance and
/// diffusion happen in the same space the output is stored in.
///
/// Palette order is significant. When two entries are equidistant from a
/// pixel, the entry with the lower index wins, so matching is deterministic
/// for a given palette.
///
/// # Example
///
/// ```
/// use eink_quantize::Palette;
///
/// let palette = Palette::new(&[[0, 0, 0], [255, 255, 255]]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.nearest_index([10, 10, 10]), 0);
/// assert_eq!(palette.color(1), [255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Create a palette from sRGB triples.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] for an empty slice and
    /// [`PaletteError::TooManyColors`] for more than 256 entries.
    pub fn new(colors: &[[u8; 3]]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }
        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Number of palette entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no entries (never, by construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The sRGB triple at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn color(&self, index: usize) -> [u8; 3] {
        self.colors[index]
    }

    /// All palette entries, in order.
    #[inline]
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Index of the palette entry nearest to `pixel`.
    ///
    /// Squared Euclidean distance in sRGB; ties break toward the lower index.
    #[inline]
    pub fn nearest_index(&self, pixel: [u8; 3]) -> usize {
        let mut best = 0usize;
        let mut best_dist = u32::MAX;
        for (i, color) in self.colors.iter().enumerate() {
            let dr = i32::from(pixel[0]) - i32::from(color[0]);
            let dg = i32::from(pixel[1]) - i32::from(color[1]);
            let db = i32::from(pixel[2]) - i32::from(color[2]);
            let dist = (dr * dr + dg * dg + db * db) as u32;
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        best
    }

    /// The palette entry nearest to `pixel`.
    #[inline]
    pub fn nearest_color(&self, pixel: [u8; 3]) -> [u8; 3] {
        self.colors[self.nearest_index(pixel)]
    }
}
