//! Error types for the rasterizer

use thiserror::Error;

use crate::coords::{Extent, Point};
use crate::paint::ColorSlot;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while drawing into or exporting a framebuffer
#[derive(Error, Debug)]
pub enum Error {
    /// A coordinate fell outside `[0, width) x [0, height)`
    #[error("geometry out of bounds: ({x}, {y}) not within {width}x{height}")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// The color slot held a non-color or a channel outside `[0, 255]`
    #[error("color unknown: {0}")]
    InvalidColor(ColorSlot),

    /// Export or load could not touch the target file
    #[error("image I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Loaded image text was malformed
    #[error(transparent)]
    Parse(#[from] scanline_ppm::ParseError),

    /// Loaded image uses a channel range other than `0..=255`
    #[error("unsupported max channel value {0} (expected 255)")]
    UnsupportedMaxValue(u16),
}

impl Error {
    #[inline]
    pub(crate) fn out_of_bounds(p: Point, extent: Extent) -> Self {
        Error::OutOfBounds { x: p.x, y: p.y, width: extent.width, height: extent.height }
    }

    #[inline]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::OutOfBounds { .. })
    }

    #[inline]
    pub fn is_invalid_color(&self) -> bool {
        matches!(self, Error::InvalidColor(_))
    }
}
