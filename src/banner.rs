//! The full logo pipeline: compose, colorize, decode.
//!
//! `Banner` ties the static glyph table to a theme and exposes the three
//! stages the rest of the crate consumes: plain rows for uncolored
//! output, marked rows for terminals, and styled runs for everything
//! else.

use crate::decode::{styled_runs, StyledRun};
use crate::encode::colorize;
use crate::glyphs::{compose, LOGO_WORD};
use crate::theme::Theme;

/// A composed logo bound to a theme.
#[derive(Debug, Clone)]
pub struct Banner {
    lines: Vec<String>,
    theme: Theme,
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Banner {
    /// The standard logo word with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self::with_word(LOGO_WORD, theme)
    }

    /// A custom word; every letter must be in the glyph table.
    pub fn with_word(word: &str, theme: Theme) -> Self {
        let lines = compose(word);
        tracing::debug!(rows = lines.len(), word, "composed logo");
        Self { lines, theme }
    }

    /// Composed rows without any escape markers.
    pub fn plain_lines(&self) -> &[String] {
        &self.lines
    }

    /// Rows with truecolor escape markers, ready for a terminal.
    pub fn marked_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| colorize(line, &self.theme))
            .collect()
    }

    /// Decoded styled runs per row, the hand-off to presentation layers
    /// that paint `{text, color}` pairs themselves.
    pub fn styled_lines(&self) -> Vec<Vec<StyledRun>> {
        self.marked_lines()
            .iter()
            .map(|line| styled_runs(line))
            .collect()
    }
}
