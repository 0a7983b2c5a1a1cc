//! CLI command implementations

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Subcommand};
use flexion_core::Direction;

use crate::session::Session;

pub mod generate_config;
pub mod inflect;
pub mod list;
pub mod simplify;
pub mod validate;

/// Flags accepted by every command
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// CLI configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory of extra locale bundles, consulted before the built-in ones
    #[arg(long, global = true, value_name = "DIR", env = "FLEXION_LOCALE_DIR")]
    pub locale_dir: Option<PathBuf>,

    /// Namespace locales are resolved under
    #[arg(long, global = true, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Suppress log output and informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the plural form of each word
    Plural(inflect::InflectArgs),

    /// Print the singular form of each word
    Singular(inflect::InflectArgs),

    /// Reduce locale tags to the form used for lookup
    Simplify(simplify::SimplifyArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a locale bundle file
    Validate(validate::ValidateArgs),

    /// Generate a starter locale bundle
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List locales available under the namespace
    Locales,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        log::debug!("Command: {self:?}");
        match self {
            Commands::Plural(args) => args.execute(Direction::Plural, &Session::from_args(global)?),
            Commands::Singular(args) => {
                args.execute(Direction::Singular, &Session::from_args(global)?)
            }
            Commands::Simplify(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand, global),
            Commands::Validate(args) => args.execute(global.quiet),
            Commands::GenerateConfig(args) => args.execute(global.quiet),
        }
    }
}
