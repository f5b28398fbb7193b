//! Paint model shared between shapes and the framebuffer.
//!
//! Scope:
//! - color representation (integer RGB, one byte range per channel)
//! - the color slot carried by shapes, which may hold a non-color value

pub mod color;
pub mod slot;

pub use color::Color;
pub use slot::ColorSlot;
