use std::fmt;

use super::Color;
use crate::error::{Error, Result};
use crate::validate::is_color_valid;

/// Color value carried by a shape.
///
/// A slot may hold something that is not a color at all (`Other`), which models a
/// caller passing the wrong kind of value. Shapes accept it at construction time and
/// report [`Error::InvalidColor`] when drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Color(Color),
    Other(i64),
}

impl ColorSlot {
    /// Returns the color if the slot holds one with every channel in `[0, 255]`.
    ///
    /// This is the single color check used by every shape renderer.
    #[inline]
    pub fn resolve(self) -> Result<Color> {
        match self {
            ColorSlot::Color(c) if is_color_valid(c) => Ok(c),
            slot => Err(Error::InvalidColor(slot)),
        }
    }
}

impl From<Color> for ColorSlot {
    #[inline]
    fn from(c: Color) -> Self {
        ColorSlot::Color(c)
    }
}

impl From<i64> for ColorSlot {
    #[inline]
    fn from(v: i64) -> Self {
        ColorSlot::Other(v)
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSlot::Color(c) => write!(f, "{c}"),
            ColorSlot::Other(v) => write!(f, "non-color value {v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_valid_color() {
        assert_eq!(ColorSlot::from(Color::GREEN).resolve().unwrap(), Color::GREEN);
    }

    #[test]
    fn rejects_non_color() {
        let err = ColorSlot::from(102i64).resolve().unwrap_err();
        assert!(err.is_invalid_color());
    }

    #[test]
    fn rejects_out_of_range_channels() {
        let err = ColorSlot::from(Color::new(0, 256, 0)).resolve().unwrap_err();
        assert!(err.is_invalid_color());
    }
}
