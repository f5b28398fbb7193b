use crate::coords::{Extent, Point};
use crate::error::{Error, Result};
use crate::paint::Color;

/// Row-major grid of colors, one entry per pixel.
///
/// Invariant: `pixels.len() == width * height` at all times. Every cell starts white.
///
/// Color validity is not checked here; shape renderers validate before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Color every cell holds after initialization or [`clear`](Self::clear).
    pub const CLEAR_COLOR: Color = Color::WHITE;

    /// Allocates a `width x height` framebuffer filled with white.
    pub fn new(width: usize, height: usize) -> Self {
        let mut fb = Self { width: 0, height: 0, pixels: Vec::new() };
        fb.initialize(width, height);
        fb
    }

    /// Reallocates the grid to `width x height` and resets every cell to white.
    pub fn initialize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![Self::CLEAR_COLOR; width * height];
        log::debug!("framebuffer initialized to {}x{}", width, height);
    }

    /// Builds a framebuffer from an existing row-major grid.
    ///
    /// Returns `None` when `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// Rows top to bottom, each `width` long.
    ///
    /// Always yields `height` rows; a zero-width grid yields empty ones.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        let w = self.width;
        (0..self.height).map(move |y| &self.pixels[y * w..(y + 1) * w])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize> {
        let p = Point::new(x, y);
        if self.extent().contains(p) {
            Ok(y as usize * self.width + x as usize)
        } else {
            Err(Error::out_of_bounds(p, self.extent()))
        }
    }

    /// Overwrites the pixel at `(x, y)`.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let i = self.index(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Returns the color stored at `(x, y)`.
    pub fn read_pixel(&self, x: i32, y: i32) -> Result<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes `[x0, x1]` on row `y`, left to right.
    ///
    /// Stops at the first out-of-bounds pixel; pixels written before it stay written.
    /// An empty range (`x0 > x1`) writes nothing.
    pub fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) -> Result<()> {
        for x in x0..=x1 {
            self.write_pixel(x, y, color)?;
        }
        Ok(())
    }

    /// Resets every pixel to white.
    pub fn clear(&mut self) {
        self.pixels.fill(Self::CLEAR_COLOR);
    }

    /// Number of pixels currently equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}
