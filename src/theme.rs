//! Color themes for the logo.
//!
//! A theme maps each [`CharClass`] to a concrete RGB value. Themes are
//! immutable and constructed once; all named palettes live here so
//! customization stays in one place.

use std::str::FromStr;

use crate::classify::CharClass;
use crate::color::Rgb;

/// Concrete colors for the three character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Color for the solid block face.
    pub face: Rgb,
    /// Color for partial-block outline accents.
    pub outline: Rgb,
    /// Color for the double-line drop shadow.
    pub shadow: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mint()
    }
}

impl Theme {
    /// Mint theme - bright green face with a muted gray shadow.
    pub fn mint() -> Self {
        Self {
            face: Rgb::new(80, 250, 123),
            outline: Rgb::new(38, 173, 84),
            shadow: Rgb::new(68, 71, 90),
        }
    }

    /// Ember theme - warm orange face.
    pub fn ember() -> Self {
        Self {
            face: Rgb::new(255, 140, 0),
            outline: Rgb::new(196, 90, 12),
            shadow: Rgb::new(92, 71, 60),
        }
    }

    /// Slate theme - monochrome, for low-color surfaces.
    pub fn slate() -> Self {
        Self {
            face: Rgb::new(220, 223, 228),
            outline: Rgb::new(140, 146, 160),
            shadow: Rgb::new(70, 76, 90),
        }
    }

    /// Names accepted by [`FromStr`], in display order.
    pub const NAMES: &'static [&'static str] = &["mint", "ember", "slate"];

    /// Concrete color for a character class.
    pub fn color_for(&self, class: CharClass) -> Rgb {
        match class {
            CharClass::Face => self.face,
            CharClass::Outline => self.outline,
            CharClass::Shadow => self.shadow,
        }
    }
}

/// Error returned when parsing an unknown theme name.
#[derive(Debug, thiserror::Error)]
#[error("unknown theme '{name}' (expected one of: mint, ember, slate)")]
pub struct UnknownTheme {
    pub name: String,
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mint" => Ok(Theme::mint()),
            "ember" => Ok(Theme::ember()),
            "slate" => Ok(Theme::slate()),
            other => Err(UnknownTheme {
                name: other.to_string(),
            }),
        }
    }
}
