//! Scanline engine crate.
//!
//! This crate owns the CPU framebuffer and the shape rasterizers that write into it.
//!
//! Typical flow: create a [`Framebuffer`], build shapes, call [`Draw::draw`] on each,
//! then [`Framebuffer::export`] the result as a plain-text `P3` image.

pub mod coords;
pub mod error;
pub mod framebuffer;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod shapes;
pub mod validate;

pub use coords::{Extent, Point};
pub use error::{Error, Result};
pub use framebuffer::Framebuffer;
pub use paint::{Color, ColorSlot};
pub use scene::{Scene, SceneReport};
pub use shapes::{Circle, Draw, Rectangle, Shape, Triangle};
