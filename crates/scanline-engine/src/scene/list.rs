use crate::coords::Point;
use crate::framebuffer::Framebuffer;
use crate::paint::ColorSlot;
use crate::shapes::{Circle, Draw, Rectangle, Shape, Triangle};

use super::SceneReport;

/// A labelled shape. The label names the shape in log output and reports.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub label: String,
    pub shape: Shape,
}

/// Ordered list of shapes to draw.
///
/// Shapes are drawn in insertion order, so later shapes overwrite earlier ones
/// where they overlap.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    items: Vec<SceneItem>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, label: impl Into<String>, shape: impl Into<Shape>) {
        self.items.push(SceneItem { label: label.into(), shape: shape.into() });
    }

    pub fn push_rect(
        &mut self,
        label: impl Into<String>,
        ll: Point,
        ur: Point,
        color: impl Into<ColorSlot>,
    ) {
        self.push(label, Rectangle::new(ll, ur, color));
    }

    pub fn push_circle(
        &mut self,
        label: impl Into<String>,
        center: Point,
        radius: i32,
        color: impl Into<ColorSlot>,
    ) {
        self.push(label, Circle::new(center, radius, color));
    }

    pub fn push_triangle(
        &mut self,
        label: impl Into<String>,
        pts: [Point; 3],
        color: impl Into<ColorSlot>,
    ) {
        let [a, b, c] = pts;
        self.push(label, Triangle::new(a, b, c, color));
    }

    /// Draws every item in order.
    ///
    /// A failing shape is logged at `warn` and recorded in the report; the
    /// remaining shapes are still drawn.
    pub fn render(&self, fb: &mut Framebuffer) -> SceneReport {
        let mut report = SceneReport::default();
        for item in &self.items {
            match item.shape.draw(fb) {
                Ok(()) => {
                    log::debug!("{}: drew {}", item.label, item.shape.name());
                    report.drawn += 1;
                }
                Err(err) => {
                    log::warn!("{}: {}", item.label, err);
                    report.failures.push((item.label.clone(), err));
                }
            }
        }
        report
    }
}
