//! Show command handler - prints the logo to stdout.

use anyhow::Result;

use cole::{Banner, Theme};

/// Whether colored output should be used.
///
/// Truecolor is emitted only when stdout is a terminal and `NO_COLOR`
/// is not set; `--plain` overrides both.
fn use_color(plain: bool) -> bool {
    !plain && atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none()
}

/// Print the banner, colored or plain.
pub fn handle(theme: Theme, plain: bool) -> Result<()> {
    let banner = Banner::new(theme);

    if use_color(plain) {
        for line in banner.marked_lines() {
            println!("{}", line);
        }
    } else {
        for line in banner.plain_lines() {
            println!("{}", line);
        }
    }

    Ok(())
}
