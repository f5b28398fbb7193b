//! Validity predicates run by every shape renderer before it writes a pixel.

use crate::coords::{Extent, Point};
use crate::paint::Color;

/// True iff all three channels lie in `[0, 255]`.
#[inline]
pub fn is_color_valid(c: Color) -> bool {
    c.is_valid()
}

/// True iff `p` falls outside `[0, width) x [0, height)`.
#[inline]
pub fn is_out_of_bounds(p: Point, extent: Extent) -> bool {
    !extent.contains(p)
}
