//! Simplify command implementation

use anyhow::Result;
use clap::Args;
use flexion_core::{fallback_candidates, simplify_locale};

/// Arguments for the simplify command
#[derive(Debug, Args)]
pub struct SimplifyArgs {
    /// Locale tags such as `fr_FR.UTF-8@latin`
    #[arg(value_name = "LOCALE", required = true)]
    pub locales: Vec<String>,

    /// Print every lookup candidate, most specific first
    #[arg(long)]
    pub candidates: bool,
}

impl SimplifyArgs {
    /// Execute the simplify command
    pub fn execute(&self) -> Result<()> {
        for line in self.render() {
            println!("{line}");
        }
        Ok(())
    }

    fn render(&self) -> Vec<String> {
        self.locales
            .iter()
            .map(|locale| {
                if self.candidates {
                    fallback_candidates(locale).join(" ")
                } else {
                    simplify_locale(locale)
                }
            })
            .collect()
    }
}
