//! Input handling module
//!
//! Words come from the command line, from input files (one per line) or
//! from stdin, in that order of preference.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::error::CliError;

/// Collect the words to inflect
pub fn collect_words(words: &[String], inputs: &[PathBuf]) -> Result<Vec<String>> {
    if !words.is_empty() {
        return Ok(words.to_vec());
    }

    let collected = if inputs.is_empty() {
        log::debug!("Reading words from stdin");
        read_lines(io::stdin().lock())?
    } else {
        let mut collected = Vec::new();
        for path in inputs {
            if !path.is_file() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            log::debug!("Reading words from {}", path.display());
            collected.extend(read_lines(content.as_bytes())?);
        }
        collected
    };

    if collected.is_empty() {
        return Err(CliError::NoInput.into());
    }
    Ok(collected)
}

/// Trimmed, non-empty lines; inner spaces are kept for compounds
fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input")?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
