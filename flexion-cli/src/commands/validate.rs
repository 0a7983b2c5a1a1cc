//! Validate command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use flexion_core::{Direction, LocaleBundle};

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the locale bundle to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub locale_config: PathBuf,

    /// Words to run through the bundle after it compiles
    #[arg(short, long, value_name = "WORD")]
    pub sample: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        if !quiet {
            println!(
                "Validating locale bundle: {}",
                self.locale_config.display()
            );
        }

        match LocaleBundle::from_file(&self.locale_config) {
            Ok(bundle) => {
                if !quiet {
                    println!("✓ Locale bundle is valid!");
                    for line in summary(&bundle, &self.sample) {
                        println!("  {line}");
                    }
                }
                Ok(())
            }
            Err(e) => {
                if !quiet {
                    println!("✗ Locale bundle is invalid!");
                    println!("  Error: {e}");
                }
                Err(CliError::ValidationFailed(e.to_string()).into())
            }
        }
    }
}

fn summary(bundle: &LocaleBundle, samples: &[String]) -> Vec<String> {
    let mut lines = vec![
        format!("Locale code: {}", bundle.code()),
        format!("Locale name: {}", bundle.name()),
    ];
    for direction in [Direction::Plural, Direction::Singular] {
        let rules = bundle.rules(direction);
        lines.push(format!(
            "{direction} rules: {} in {} groups, categories: {}",
            rules.rule_count(),
            rules.groups().len(),
            rules.categories().names().join(", ")
        ));
    }
    lines.push(format!("Prepositions: {}", bundle.prepositions().len()));
    for word in samples {
        lines.push(format!(
            "{word}: plural '{}', singular '{}'",
            bundle.pluralize(word),
            bundle.singularize(word)
        ));
    }
    lines
}
