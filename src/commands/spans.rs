//! Spans command handler - emits decoded styled runs as JSON.
//!
//! The output is one array per logo row, each element a
//! `{"text": .., "color": "rgb(r, g, b)" | null}` pair. This is the
//! hand-off format for hosts that paint styled text themselves instead
//! of interpreting escape codes.

use std::io::{self, Write};

use anyhow::Result;

use cole::{Banner, Theme};

/// Serialize the banner's styled runs to stdout.
pub fn handle(theme: Theme, compact: bool) -> Result<()> {
    let banner = Banner::new(theme);
    let rows = banner.styled_lines();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if compact {
        serde_json::to_writer(&mut out, &rows)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &rows)?;
    }
    writeln!(out)?;

    Ok(())
}
