//! flexion command-line entry point

use anyhow::Result;
use clap::Parser;
use flexion_cli::commands::{Commands, GlobalArgs};

/// Pluralize and singularize words with locale-aware rules
#[derive(Debug, Parser)]
#[command(name = "flexion", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.global.init_logging();
    cli.command.execute(&cli.global)
}
