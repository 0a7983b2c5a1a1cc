//! Plural and singular command implementation

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use flexion_core::Direction;

use crate::input::collect_words;
use crate::output::{create_formatter, InflectionRecord, OutputFormat};
use crate::session::Session;

/// Arguments for the plural and singular commands
#[derive(Debug, Args)]
pub struct InflectArgs {
    /// Words to inflect (default: one per line from --input or stdin)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Files with one word per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language or locale tag, e.g. `fr` or `en_US.UTF-8`
    #[arg(short, long, value_name = "LOCALE")]
    pub language: Option<String>,
}

impl InflectArgs {
    /// Execute the command in `direction`
    pub fn execute(&self, direction: Direction, session: &Session) -> Result<()> {
        let language = session.language(self.language.as_deref());
        let bundle = session
            .registry()
            .load(language, session.namespace())
            .with_context(|| format!("Cannot {} words", verb(direction)))?;
        log::info!("Using locale '{}' ({}) for '{language}'", bundle.code(), bundle.name());

        let words = collect_words(&self.words, &self.input)?;
        let format = session.output_format(self.format)?;

        let mut formatter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                create_formatter(format, session.pretty_json(), BufWriter::new(file))
            }
            None => create_formatter(format, session.pretty_json(), io::stdout()),
        };

        for word in words {
            let output = match direction {
                Direction::Plural => bundle.pluralize(&word),
                Direction::Singular => bundle.singularize(&word),
            };
            log::trace!("{word} -> {output}");
            formatter.format_record(&InflectionRecord {
                input: word,
                output,
                language: bundle.code().to_string(),
                direction,
            })?;
        }
        formatter.finish()
    }
}

fn verb(direction: Direction) -> &'static str {
    match direction {
        Direction::Plural => "pluralize",
        Direction::Singular => "singularize",
    }
}
