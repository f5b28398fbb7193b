//! Logger setup for binaries that drive the rasterizer.
//!
//! Library code only emits through the `log` facade; nothing is printed until a
//! binary calls [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_LEVEL};
