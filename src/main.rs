//! COLE command-line interface entry point.

mod commands;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cole::cli::{Cli, Commands};
use cole::Theme;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => commands::show::handle(Theme::default(), false),
        Some(Commands::Show { theme, plain }) => commands::show::handle(theme, plain),
        Some(Commands::Spans { theme, compact }) => commands::spans::handle(theme, compact),
        Some(Commands::Preview { theme }) => commands::preview::handle(theme),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
