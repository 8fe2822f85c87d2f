//! Truecolor RGB value type.
//!
//! The in-memory color carried through the encode/decode pipeline. On the
//! wire it appears as the `38;2;R;G;B` payload of an SGR sequence; toward
//! the presentation layer it serializes as a CSS-style `rgb(r, g, b)`
//! string.

use std::fmt;

use serde::Serializer;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style color string, e.g. `rgb(80, 250, 123)`.
    ///
    /// This exact format is the contract with non-terminal hosts; the
    /// spacing after each comma is load-bearing.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Serialize an `Option<Rgb>` as a CSS color string or null.
///
/// Used by [`crate::decode::StyledRun`] for the JSON spans surface.
pub fn serialize_css<S>(color: &Option<Rgb>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match color {
        Some(rgb) => serializer.serialize_str(&rgb.css()),
        None => serializer.serialize_none(),
    }
}
