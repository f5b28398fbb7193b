//! Shape renderers.
//!
//! Each shape is an immutable value that receives the framebuffer by reference for
//! every draw call. Renderers validate before writing where they can; see the
//! per-shape docs for which checks run eagerly.
//!
//! Adding a shape:
//! - add a module here with the value type and its `Draw` impl
//! - add a variant to [`Shape`]
//! - add a push helper to `Scene`

mod circle;
mod rect;
mod triangle;

pub use circle::Circle;
pub use rect::Rectangle;
pub use triangle::Triangle;

use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// Something that can rasterize itself into a framebuffer.
pub trait Draw {
    fn draw(&self, fb: &mut Framebuffer) -> Result<()>;

    /// Short lowercase name of the shape kind, e.g. `"rectangle"`.
    fn name(&self) -> &'static str;
}

/// Any of the supported shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
}

impl Draw for Shape {
    fn draw(&self, fb: &mut Framebuffer) -> Result<()> {
        match self {
            Shape::Rectangle(s) => s.draw(fb),
            Shape::Circle(s) => s.draw(fb),
            Shape::Triangle(s) => s.draw(fb),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Shape::Rectangle(s) => s.name(),
            Shape::Circle(s) => s.name(),
            Shape::Triangle(s) => s.name(),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Circle> for Shape {
    fn from(s: Circle) -> Self {
        Shape::Circle(s)
    }
}

impl From<Triangle> for Shape {
    fn from(s: Triangle) -> Self {
        Shape::Triangle(s)
    }
}
