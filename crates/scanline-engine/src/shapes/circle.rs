use crate::coords::Point;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::paint::ColorSlot;
use crate::validate::is_out_of_bounds;

use super::Draw;

/// Filled disk.
///
/// Only the center is validated up front. Edge pixels are checked as they are
/// written: the first one outside the framebuffer aborts the draw with
/// `OutOfBounds` and earlier writes are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    /// Radius in pixels. Negative radii draw nothing.
    pub radius: i32,
    pub color: ColorSlot,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: i32, color: impl Into<ColorSlot>) -> Self {
        Self { center, radius, color: color.into() }
    }

    /// Half-width of the span at vertical offset `dy` from the center.
    #[inline]
    fn half_width(&self, dy: i64) -> i32 {
        let r = i64::from(self.radius);
        ((r * r - dy * dy) as f64).sqrt().floor() as i32
    }
}

impl Draw for Circle {
    fn draw(&self, fb: &mut Framebuffer) -> Result<()> {
        let extent = fb.extent();
        if is_out_of_bounds(self.center, extent) {
            return Err(Error::out_of_bounds(self.center, extent));
        }
        let color = self.color.resolve()?;

        log::trace!("circle at {:?} r={} {}", self.center, self.radius, color);
        let Point { x: cx, y: cy } = self.center;
        for y in cy.saturating_sub(self.radius)..=cy.saturating_add(self.radius) {
            let dx = self.half_width(i64::from(y) - i64::from(cy));
            fb.fill_span(y, cx - dx, cx + dx, color)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    fn p(x: i32, y: i32) -> Point { Point::new(x, y) }

    #[test]
    fn zero_radius_is_one_pixel() {
        let mut fb = Framebuffer::new(9, 9);
        Circle::new(p(4, 6), 0, Color::BLUE).draw(&mut fb).unwrap();
        assert_eq!(fb.count(Color::BLUE), 1);
        assert_eq!(fb.read_pixel(4, 6).unwrap(), Color::BLUE);
    }

    #[test]
    fn small_disk_spans() {
        // Half-widths for r=2: 0, 1, 2, 1, 0.
        let mut fb = Framebuffer::new(11, 11);
        Circle::new(p(5, 5), 2, Color::GREEN).draw(&mut fb).unwrap();
        assert_eq!(fb.count(Color::GREEN), 1 + 3 + 5 + 3 + 1);
        assert_eq!(fb.read_pixel(5, 3).unwrap(), Color::GREEN);
        assert_eq!(fb.read_pixel(4, 3).unwrap(), Color::WHITE);
        assert_eq!(fb.read_pixel(3, 5).unwrap(), Color::GREEN);
        assert_eq!(fb.read_pixel(2, 5).unwrap(), Color::WHITE);
    }

    #[test]
    fn disk_is_symmetric() {
        let mut fb = Framebuffer::new(64, 64);
        Circle::new(p(32, 32), 20, Color::PURPLE).draw(&mut fb).unwrap();
        for y in 0..64 {
            for x in 0..64 {
                let mirrored = fb.read_pixel(64 - x, 64 - y);
                if let Ok(m) = mirrored {
                    assert_eq!(fb.read_pixel(x, y).unwrap(), m, "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn center_out_of_bounds_writes_nothing() {
        let mut fb = Framebuffer::new(10, 10);
        let err = Circle::new(p(10, 5), 1, Color::RED).draw(&mut fb).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(fb.count(Color::RED), 0);
    }

    #[test]
    fn center_is_checked_before_color() {
        let mut fb = Framebuffer::new(10, 10);
        let err = Circle::new(p(-3, 5), 1, 4i64).draw(&mut fb).unwrap_err();
        assert!(err.is_out_of_bounds());
    }

    #[test]
    fn non_color_slot_is_rejected() {
        let mut fb = Framebuffer::new(10, 10);
        let err = Circle::new(p(5, 5), 2, 4i64).draw(&mut fb).unwrap_err();
        assert!(err.is_invalid_color());
        assert_eq!(fb.count(Color::WHITE), 100);
    }

    #[test]
    fn edge_overflow_keeps_partial_writes() {
        // Row y=6 writes x=10; row y=7 writes x=8..=11 then fails at x=12.
        let mut fb = Framebuffer::new(12, 20);
        let err = Circle::new(p(10, 10), 4, Color::RED).draw(&mut fb).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(fb.count(Color::RED), 5);
    }

    #[test]
    fn top_edge_overflow_fails_before_writing() {
        let mut fb = Framebuffer::new(10, 10);
        let err = Circle::new(p(0, 0), 5, Color::RED).draw(&mut fb).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(fb.count(Color::RED), 0);
    }

    #[test]
    fn negative_radius_draws_nothing() {
        let mut fb = Framebuffer::new(10, 10);
        Circle::new(p(5, 5), -3, Color::RED).draw(&mut fb).unwrap();
        assert_eq!(fb.count(Color::RED), 0);
    }
}
