//! Reusable TUI widgets.

pub mod logo;

pub use logo::Logo;
