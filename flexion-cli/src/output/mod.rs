//! Output formatting module

use std::io::Write;

use anyhow::Result;
use flexion_core::Direction;
use serde::{Deserialize, Serialize};

/// One inflected word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflectionRecord {
    pub input: String,
    pub output: String,
    /// Code of the locale bundle that produced `output`
    pub language: String,
    pub direction: Direction,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single result
    fn format_record(&mut self, record: &InflectionRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one result per line
    Text,
    /// JSON array of results with metadata
    Json,
    /// Markdown table
    Markdown,
}

/// Formatter for `format` writing to `writer`
pub fn create_formatter<W>(format: OutputFormat, pretty_json: bool, writer: W) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
