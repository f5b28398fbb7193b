use crate::coords::Point;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::paint::ColorSlot;
use crate::validate::is_out_of_bounds;

use super::Draw;

/// Filled axis-aligned rectangle covering the closed range `[ll, ur]`.
///
/// Corners are not reordered: if `ll.x > ur.x` or `ll.y > ur.y` nothing is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Corner with the smaller coordinates.
    pub ll: Point,
    /// Corner with the larger coordinates.
    pub ur: Point,
    pub color: ColorSlot,
}

impl Rectangle {
    #[inline]
    pub fn new(ll: Point, ur: Point, color: impl Into<ColorSlot>) -> Self {
        Self { ll, ur, color: color.into() }
    }
}

impl Draw for Rectangle {
    /// Checks the color, then both corners, then fills row by row.
    fn draw(&self, fb: &mut Framebuffer) -> Result<()> {
        let color = self.color.resolve()?;

        let extent = fb.extent();
        for corner in [self.ll, self.ur] {
            if is_out_of_bounds(corner, extent) {
                return Err(Error::out_of_bounds(corner, extent));
            }
        }

        log::trace!("rectangle {:?}..={:?} {}", self.ll, self.ur, color);
        for y in self.ll.y..=self.ur.y {
            fb.fill_span(y, self.ll.x, self.ur.x, color)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "rectangle"
    }
}
