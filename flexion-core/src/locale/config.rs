//! Configuration structures and validation
//!
//! This module defines the TOML schema for locale bundles.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InflectError, Result};

/// Root locale configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub compound: Compound,
    /// Categories shared by both directions
    #[serde(default)]
    pub categories: HashMap<String, Vec<String>>,
    pub plural: DirectionConfig,
    pub singular: DirectionConfig,
}

/// Locale metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub case: CaseMode,
    /// English-style possessive handling (`dog's` -> `dogs'`)
    #[serde(default)]
    pub possessive: bool,
}

/// Case normalization applied to a word before matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    #[default]
    Lower,
    Capitalize,
}

impl CaseMode {
    /// Normalize `word` according to this mode
    pub fn apply(self, word: &str) -> String {
        match self {
            CaseMode::Lower => word.to_lowercase(),
            CaseMode::Capitalize => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Compound word configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Compound {
    #[serde(default)]
    pub prepositions: Vec<String>,
}

/// Rules and categories for one direction (plural or singular)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectionConfig {
    /// Direction-specific categories, merged over the shared ones
    #[serde(default)]
    pub categories: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub groups: Vec<RuleGroupConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleGroupConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl LocaleConfig {
    /// Parse a configuration from TOML text; `origin` names the source in errors
    pub fn from_toml_str(toml_str: &str, origin: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| InflectError::invalid(origin, format!("failed to parse TOML: {e}")))
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| InflectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Shared categories with the direction's own categories merged in
    pub fn merged_categories(&self, direction: &DirectionConfig) -> HashMap<String, HashSet<String>> {
        let mut merged: HashMap<String, HashSet<String>> = HashMap::new();
        for (name, words) in self.categories.iter().chain(direction.categories.iter()) {
            merged
                .entry(name.clone())
                .or_default()
                .extend(words.iter().cloned());
        }
        merged
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let code = self.metadata.code.trim();
        if code.is_empty() {
            return Err(InflectError::invalid("<unnamed>", "metadata.code is empty"));
        }

        for (label, direction) in [("plural", &self.plural), ("singular", &self.singular)] {
            if direction.groups.is_empty() {
                return Err(InflectError::invalid(
                    code,
                    format!("no {label} rule groups defined"),
                ));
            }

            let categories = self.merged_categories(direction);
            for rule in direction.groups.iter().flat_map(|g| g.rules.iter()) {
                if let Some(category) = &rule.category {
                    if !categories.contains_key(category) {
                        return Err(InflectError::invalid(
                            code,
                            format!("{label} rule '{}' references unknown category '{category}'", rule.pattern),
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}
