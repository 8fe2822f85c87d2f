//! Workspace automation tasks.
//!
//! Currently only man-page generation: `cargo run -p xtask -- mangen`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for cole")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into target/man
    Mangen {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Mangen { out_dir } => mangen(out_dir),
    }
}

fn mangen(out_dir: PathBuf) -> Result<()> {
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let cmd = cole::cli::Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    let path = out_dir.join("cole.1");
    fs::write(&path, buffer).with_context(|| format!("writing {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}
