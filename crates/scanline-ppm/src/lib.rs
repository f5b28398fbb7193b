//! Lexer and parser for the plain-text **P3** image format.
//!
//! This crate is intentionally dependency-free so exported frames can be read
//! back by tests and tooling without linking the rasterizer.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`image`] | `PpmImage` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use scanline_ppm::parse_str;
//!
//! let img = parse_str("P3\n1 1\n255\n255 0 0 \n").unwrap();
//! assert_eq!(img.pixel(0, 0), Some([255, 0, 0]));
//! ```

pub mod error;
pub mod image;
pub mod lexer;
pub mod parser;

pub use error::ParseError;
pub use image::PpmImage;
pub use parser::{parse_str, MAGIC};

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) -> PpmImage { parse_str(src).unwrap() }
    fn err(src: &str) -> ParseError { parse_str(src).unwrap_err() }

    #[test] fn single_pixel() {
        let img = ok("P3\n1 1\n255\n1 2 3 \n");
        assert_eq!((img.width, img.height, img.max_value), (1, 1, 255));
        assert_eq!(img.pixels, vec![[1, 2, 3]]);
    }
    #[test] fn row_major_order() {
        let img = ok("P3\n2 2\n255\n0 0 0 1 1 1 \n2 2 2 3 3 3 \n");
        assert_eq!(img.pixel(1, 0), Some([1, 1, 1]));
        assert_eq!(img.pixel(0, 1), Some([2, 2, 2]));
        assert_eq!(img.pixel(2, 0), None);
    }
    #[test] fn layout_is_free_form() {
        ok("P3 1 2 255 0 0 0 9 9 9");
    }
    #[test] fn header_comment() {
        ok("P3\n# generator\n1 1\n255\n0 0 0\n");
    }
    #[test] fn other_max_value() {
        assert_eq!(ok("P3 1 1 15 15 0 7").max_value, 15);
    }
    #[test] fn err_wrong_magic() { err("P6\n1 1\n255\n0 0 0\n"); }
    #[test] fn err_missing_magic() { err("1 1\n255\n0 0 0\n"); }
    #[test] fn err_zero_width() { err("P3\n0 1\n255\n"); }
    #[test] fn err_zero_max_value() { err("P3\n1 1\n0\n0 0 0\n"); }
    #[test] fn err_sample_too_large() {
        let e = err("P3\n1 1\n255\n0 256 0\n");
        assert_eq!((e.line, e.col), (4, 3));
    }
    #[test] fn err_truncated() { err("P3\n2 1\n255\n0 0 0\n"); }
    #[test] fn err_dimensions_exceed_samples() {
        let e = err("P3 100000 100000 255 0 0 0");
        assert!(e.message.contains("only 3 samples"), "{e}");
    }
    #[test] fn err_dimensions_overflow_capacity() {
        err("P3 4294967295 4294967295 255 0 0 0");
    }
    #[test] fn err_dimensions_overflow_usize() {
        err("P3 4294967295 4294967295 255");
    }
    #[test] fn err_trailing_samples() { err("P3\n1 1\n255\n0 0 0 0\n"); }
}
