use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::Framebuffer;
use crate::error::{Error, Result};
use crate::paint::Color;

/// Extension appended to the base name passed to [`Framebuffer::export`].
pub const PPM_EXTENSION: &str = "ppm";

const MAX_VALUE: u16 = 255;

/// `P3` text of a framebuffer. Both the writer and the string form go through this.
struct PpmText<'a>(&'a Framebuffer);

impl fmt::Display for PpmText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fb = self.0;
        write!(f, "{}\n{} {}\n{}\n", scanline_ppm::MAGIC, fb.width(), fb.height(), MAX_VALUE)?;
        for row in fb.rows() {
            for c in row {
                write!(f, "{} {} {} ", c.r, c.g, c.b)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Framebuffer {
    /// Serializes the grid as `P3` text.
    ///
    /// Layout: `P3`, `<width> <height>`, `255`, then one line per row (top row first)
    /// holding `R G B ` for every column, including a trailing space after the last.
    pub fn write_ppm<W: Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "{}", PpmText(self))?;
        w.flush()
    }

    /// Returns the `P3` text produced by [`write_ppm`](Self::write_ppm).
    pub fn to_ppm_string(&self) -> String {
        PpmText(self).to_string()
    }

    /// Writes the grid to `<base>.ppm`, creating or truncating the file.
    ///
    /// Returns the path that was written.
    pub fn export(&self, base: impl AsRef<Path>) -> Result<PathBuf> {
        let path = export_path(base.as_ref());
        let file = File::create(&path)?;
        self.write_ppm(BufWriter::new(file))?;
        log::info!(
            "exported {}x{} framebuffer to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(path)
    }

    /// Rebuilds a framebuffer from `P3` text with a max value of 255.
    pub fn from_ppm_str(src: &str) -> Result<Self> {
        let img = scanline_ppm::parse_str(src)?;
        if img.max_value != MAX_VALUE {
            return Err(Error::UnsupportedMaxValue(img.max_value));
        }
        let pixels = img
            .pixels
            .iter()
            .map(|&[r, g, b]| Color::new(r.into(), g.into(), b.into()))
            .collect();
        let fb = Framebuffer::from_pixels(img.width, img.height, pixels).ok_or_else(|| {
            scanline_ppm::ParseError {
                message: format!("expected {} pixels", img.width * img.height),
                line: 1,
                col: 1,
            }
        })?;
        Ok(fb)
    }

    /// Reads and parses a `P3` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)?;
        let fb = Self::from_ppm_str(&src)?;
        log::debug!("loaded {}x{} framebuffer from {}", fb.width(), fb.height(), path.display());
        Ok(fb)
    }
}

/// `<base>.ppm`; the extension is appended, never substituted.
fn export_path(base: &Path) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(PPM_EXTENSION);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Framebuffer {
        let mut fb = Framebuffer::new(2, 2);
        fb.write_pixel(0, 0, Color::RED).unwrap();
        fb.write_pixel(1, 0, Color::GREEN).unwrap();
        fb.write_pixel(0, 1, Color::BLUE).unwrap();
        fb
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn exact_text_for_two_by_two() {
        assert_eq!(
            two_by_two().to_ppm_string(),
            "P3\n2 2\n255\n255 0 0 0 255 0 \n0 0 255 255 255 255 \n"
        );
    }

    #[test]
    fn non_square_header_is_width_then_height() {
        let text = Framebuffer::new(3, 1).to_ppm_string();
        assert!(text.starts_with("P3\n3 1\n255\n"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn zero_width_keeps_one_line_per_row() {
        assert_eq!(Framebuffer::new(0, 2).to_ppm_string(), "P3\n0 2\n255\n\n\n");
    }

    #[test]
    fn writer_and_string_agree() {
        let mut out = Vec::new();
        two_by_two().write_ppm(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), two_by_two().to_ppm_string());
    }

    // ── files ─────────────────────────────────────────────────────────────

    #[test]
    fn export_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = two_by_two().export(dir.path().join("frame")).unwrap();
        assert_eq!(path, dir.path().join("frame.ppm"));
        assert_eq!(fs::read_to_string(&path).unwrap(), two_by_two().to_ppm_string());
    }

    #[test]
    fn export_keeps_dotted_base() {
        assert_eq!(export_path(Path::new("out.v2")), PathBuf::from("out.v2.ppm"));
    }

    #[test]
    fn export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("frame");
        Framebuffer::new(8, 8).export(&base).unwrap();
        let path = two_by_two().export(&base).unwrap();
        assert_eq!(Framebuffer::load(path).unwrap(), two_by_two());
    }

    #[test]
    fn export_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = two_by_two().export(dir.path().join("nope").join("frame")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    // ── round trip ────────────────────────────────────────────────────────

    #[test]
    fn reparse_reconstructs_grid() {
        let mut fb = Framebuffer::new(7, 3);
        for x in 0..7 {
            fb.write_pixel(x, x % 3, Color::new(x * 30, 255 - x, 7)).unwrap();
        }
        assert_eq!(Framebuffer::from_ppm_str(&fb.to_ppm_string()).unwrap(), fb);
    }

    #[test]
    fn rejects_other_max_value() {
        let err = Framebuffer::from_ppm_str("P3\n1 1\n15\n1 2 3\n").unwrap_err();
        assert!(matches!(err, Error::UnsupportedMaxValue(15)));
    }

    #[test]
    fn surfaces_parse_errors() {
        let err = Framebuffer::from_ppm_str("P3\n1 1\n255\n1 2\n").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
