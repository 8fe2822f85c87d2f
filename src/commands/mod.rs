//! CLI subcommand handlers.

pub mod preview;
pub mod show;
pub mod spans;
