//! Markdown output formatter

use super::{InflectionRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs results as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &InflectionRecord) -> Result<()> {
        if self.record_count == 0 {
            writeln!(self.writer, "| Input | {} |", capitalized(record.direction.as_str()))?;
            writeln!(self.writer, "|-------|-------|")?;
        }
        self.record_count += 1;
        writeln!(
            self.writer,
            "| {} | {} |",
            escape_cell(&record.input),
            escape_cell(&record.output)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "*Total words: {}*", self.record_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn capitalized(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::{record, SharedBuffer};

    #[test]
    fn test_table_layout() {
        let buffer = SharedBuffer::default();
        let mut formatter = MarkdownFormatter::new(buffer.clone());
        formatter.format_record(&record("cat", "cats")).unwrap();
        formatter.format_record(&record("a|b", "a|bs")).unwrap();
        formatter.finish().unwrap();

        let output = buffer.contents();
        assert!(output.starts_with("| Input | Plural |\n|-------|-------|\n"));
        assert!(output.contains("| cat | cats |"));
        assert!(output.contains("| a\\|b | a\\|bs |"));
        assert!(output.ends_with("*Total words: 2*\n"));
    }
}
