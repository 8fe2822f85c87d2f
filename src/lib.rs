//! COLE - Colored Logo Engine.
//!
//! Renders a block-letter logo, colorizes it with truecolor ANSI escape
//! sequences, and decodes those same sequences back into styled runs for
//! surfaces that cannot interpret escape codes themselves.
//!
//! The pipeline has three stages:
//!
//! 1. [`glyphs::compose`] joins static glyph rows into plain logo lines.
//! 2. [`encode::colorize`] classifies each character and interleaves
//!    `ESC[38;2;R;G;Bm` / `ESC[0m` markers at color transitions.
//! 3. [`decode::styled_runs`] splits a marked line into ordered
//!    `{text, color}` spans.
//!
//! [`banner::Banner`] wires the stages together; [`tui::Logo`] paints the
//! result on a ratatui buffer.

pub mod banner;
pub mod classify;
pub mod cli;
pub mod color;
pub mod decode;
pub mod encode;
pub mod glyphs;
pub mod theme;
pub mod tui;

pub use banner::Banner;
pub use classify::{classify, CharClass};
pub use color::Rgb;
pub use decode::{styled_runs, StyledRun};
pub use encode::colorize;
pub use theme::Theme;
