//! CPU framebuffer.
//!
//! Responsibilities:
//! - own the row-major color grid and its dimensions
//! - bounds-checked pixel reads and writes
//! - `P3` export and re-import (see `ppm`)

mod buffer;
mod ppm;

pub use buffer::Framebuffer;
pub use ppm::PPM_EXTENSION;
