//! Command-line interface definition.
//!
//! Lives in the library so the `xtask` man-page generator can reuse the
//! clap command tree.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::theme::Theme;

/// Version string with git SHA and build date when available.
///
/// Official builds (the `release` feature) omit the SHA for a clean
/// version string.
pub fn long_version() -> String {
    let mut version = env!("CARGO_PKG_VERSION").to_string();

    if let Some(sha) = option_env!("VERGEN_GIT_SHA") {
        let short = &sha[..sha.len().min(8)];
        version.push_str(&format!(" ({})", short));
    }

    version.push_str(&format!(", built {}", env!("COLE_BUILD_DATE")));
    version
}

#[derive(Parser)]
#[command(
    name = "cole",
    about = "Colored Logo Engine - block-glyph banners as truecolor ANSI and styled spans",
    version,
    long_version = long_version()
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the logo to stdout (colored when attached to a terminal)
    Show {
        /// Color theme
        #[arg(long, default_value = "mint")]
        theme: Theme,
        /// Disable color even on a terminal
        #[arg(long)]
        plain: bool,
    },
    /// Emit the logo as JSON styled runs for non-terminal hosts
    Spans {
        /// Color theme
        #[arg(long, default_value = "mint")]
        theme: Theme,
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Preview the logo widget in an alternate screen
    Preview {
        /// Color theme
        #[arg(long, default_value = "mint")]
        theme: Theme,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
