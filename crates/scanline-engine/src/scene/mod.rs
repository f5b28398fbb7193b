//! Scene (ordered shape list) types.
//!
//! Responsibilities:
//! - record labelled shapes in insertion order
//! - draw them sequentially into a framebuffer, reporting failures per shape
//!   without stopping at the first one

mod list;
mod report;

pub use list::{Scene, SceneItem};
pub use report::SceneReport;
