//! Coordinate types shared across the framebuffer and shape renderers.
//!
//! Canonical space:
//! - Integer pixels
//! - Origin at row 0, column 0 (the first row written on export)
//! - +X right, +Y toward later rows

mod extent;
mod point;

pub use extent::Extent;
pub use point::Point;
