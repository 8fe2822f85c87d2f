//! TUI components built on ratatui.
//!
//! Hosts the widgets that paint decoded styled runs onto a ratatui
//! buffer instead of a raw terminal stream.

pub mod widgets;

pub use widgets::Logo;
