//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flexion_core::{DEFAULT_LANGUAGE, DEFAULT_NAMESPACE};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Inflection configuration
    #[serde(default)]
    pub inflection: InflectionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Inflection-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct InflectionConfig {
    /// Language used when `--language` is not given
    pub default_language: String,

    /// Namespace locales are resolved under
    pub namespace: String,

    /// Directory of extra locale bundles layered over the built-in ones
    pub locale_dir: Option<PathBuf>,
}

impl Default for InflectionConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            locale_dir: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
