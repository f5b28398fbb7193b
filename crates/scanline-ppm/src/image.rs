/// A decoded `P3` image.
///
/// `pixels` holds `width * height` RGB triplets in row-major order, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmImage {
    pub width: usize,
    pub height: usize,
    /// Maximum sample value declared in the header.
    pub max_value: u16,
    pub pixels: Vec<[u16; 3]>,
}

impl PpmImage {
    /// Returns the triplet at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u16; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }
}
