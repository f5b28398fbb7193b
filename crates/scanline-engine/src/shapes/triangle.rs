use std::cmp::Ordering;

use crate::coords::Point;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::paint::ColorSlot;
use crate::raster::interpolate;
use crate::validate::is_out_of_bounds;

use super::Draw;

/// Filled triangle, rasterized by scanline fill over interpolated edges.
///
/// All three vertices are validated before any pixel is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub pt0: Point,
    pub pt1: Point,
    pub pt2: Point,
    pub color: ColorSlot,
}

impl Triangle {
    #[inline]
    pub fn new(pt0: Point, pt1: Point, pt2: Point, color: impl Into<ColorSlot>) -> Self {
        Self { pt0, pt1, pt2, color: color.into() }
    }

    /// Vertices ordered so that `y0 <= y1 <= y2`, using stable pairwise swaps.
    fn sorted_by_y(&self) -> [Point; 3] {
        let [mut p0, mut p1, mut p2] = [self.pt0, self.pt1, self.pt2];
        if p1.y < p0.y {
            std::mem::swap(&mut p0, &mut p1);
        }
        if p2.y < p0.y {
            std::mem::swap(&mut p0, &mut p2);
        }
        if p2.y < p1.y {
            std::mem::swap(&mut p1, &mut p2);
        }
        [p0, p1, p2]
    }
}

/// Per-scanline left and right x-extents, indexed by `y - y0`.
struct Spans {
    left: Vec<i32>,
    right: Vec<i32>,
}

/// Builds the long edge `p0 -> p2` and the joined short edges `p0 -> p1 -> p2`,
/// then picks which one bounds the left side.
///
/// The choice is made once at the middle row: a triangle is convex, so the same
/// edge sequence stays on the left for the whole height. When both edges meet at
/// the middle row (a flat top only one row tall), the bend row `y1` decides.
fn edge_spans([p0, p1, p2]: [Point; 3]) -> Spans {
    let x01 = interpolate(p0.y, p0.x, p1.y, p1.x);
    let x12 = interpolate(p1.y, p1.x, p2.y, p2.x);
    let x02 = interpolate(p0.y, p0.x, p2.y, p2.x);

    // `x01` ends on the row where `x12` starts; keep that row once.
    let mut x012 = x01;
    x012.pop();
    x012.extend(x12);

    let m = x012.len() / 2;
    let bend = (p1.y - p0.y) as usize;
    let long_is_left = match x02[m].cmp(&x012[m]) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => x02[bend] < x012[bend],
    };
    if long_is_left {
        Spans { left: x02, right: x012 }
    } else {
        Spans { left: x012, right: x02 }
    }
}

impl Draw for Triangle {
    fn draw(&self, fb: &mut Framebuffer) -> Result<()> {
        let extent = fb.extent();
        for pt in [self.pt0, self.pt1, self.pt2] {
            if is_out_of_bounds(pt, extent) {
                return Err(Error::out_of_bounds(pt, extent));
            }
        }
        let color = self.color.resolve()?;

        let sorted = self.sorted_by_y();
        let [p0, _, p2] = sorted;
        log::trace!("triangle {:?} {}", sorted, color);

        // Every vertex on one row: a single span through all three.
        if p0.y == p2.y {
            let (lo, hi) = sorted
                .iter()
                .fold((i32::MAX, i32::MIN), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
            return fb.fill_span(p0.y, lo, hi, color);
        }

        let spans = edge_spans(sorted);
        for (row, y) in (p0.y..=p2.y).enumerate() {
            fb.fill_span(y, spans.left[row], spans.right[row], color)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "triangle"
    }
}
