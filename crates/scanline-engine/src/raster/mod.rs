//! Scanline helpers shared by the shape renderers.

mod interpolate;

pub use interpolate::interpolate;
