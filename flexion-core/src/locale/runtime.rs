//! Compiled locale bundles
//!
//! This module bridges parsed configuration and the tables the inflection
//! engine walks.

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::inflect::{self, Direction};
use crate::locale::config::{CaseMode, DirectionConfig, LocaleConfig};
use crate::locale::tables::{CategorySets, Rule, RuleGroup, RuleTable};

/// Immutable rule set for one language or territory
#[derive(Debug, Clone)]
pub struct LocaleBundle {
    code: String,
    name: String,
    case: CaseMode,
    possessive: bool,
    plural: RuleTable,
    singular: RuleTable,
    prepositions: HashSet<String>,
}

impl LocaleBundle {
    /// Create from configuration
    pub fn from_config(config: &LocaleConfig) -> Result<Self> {
        config.validate()?;

        let code = config.metadata.code.clone();
        let plural = compile_direction(config, &config.plural, &code)?;
        let singular = compile_direction(config, &config.singular, &code)?;

        Ok(Self {
            name: config.metadata.name.clone(),
            case: config.metadata.case,
            possessive: config.metadata.possessive,
            plural,
            singular,
            prepositions: config.compound.prepositions.iter().cloned().collect(),
            code,
        })
    }

    /// Parse and compile TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::from_config(&LocaleConfig::from_toml_str(toml_str, "<inline>")?)
    }

    /// Read, parse and compile a bundle file
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_config(&LocaleConfig::from_file(path)?)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn case_mode(&self) -> CaseMode {
        self.case
    }

    pub fn handles_possessives(&self) -> bool {
        self.possessive
    }

    /// Rule table for one direction
    pub fn rules(&self, direction: Direction) -> &RuleTable {
        match direction {
            Direction::Plural => &self.plural,
            Direction::Singular => &self.singular,
        }
    }

    pub fn is_preposition(&self, word: &str) -> bool {
        self.prepositions.contains(word)
    }

    pub fn prepositions(&self) -> &HashSet<String> {
        &self.prepositions
    }

    /// Plural form of `word` under this bundle's rules
    pub fn pluralize(&self, word: &str) -> String {
        inflect::inflect_with(self, word, Direction::Plural)
    }

    /// Singular form of `word` under this bundle's rules
    pub fn singularize(&self, word: &str) -> String {
        inflect::inflect_with(self, word, Direction::Singular)
    }
}

fn compile_direction(
    config: &LocaleConfig,
    direction: &DirectionConfig,
    code: &str,
) -> Result<RuleTable> {
    let groups = direction
        .groups
        .iter()
        .map(|group| {
            let rules = group
                .rules
                .iter()
                .map(|rule| Rule::compile(rule, code))
                .collect::<Result<Vec<_>>>()?;
            Ok(RuleGroup {
                name: group.name.clone(),
                rules,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RuleTable::new(
        groups,
        CategorySets::new(config.merged_categories(direction)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InflectError;

    const SAMPLE: &str = r#"
[metadata]
code = "xx"
name = "Sample"
case = "capitalize"
possessive = true

[compound]
prepositions = ["of"]

[categories]
uninflected = ["Fish"]

[plural.categories]
irregular = ["Ox"]

[[plural.groups]]
name = "exceptions"
rules = [
    { pattern = '$', replacement = "", category = "uninflected" },
    { pattern = '$', replacement = "en", category = "irregular" },
]

[[plural.groups]]
name = "default"
rules = [{ pattern = '$', replacement = "s" }]

[[singular.groups]]
rules = [{ pattern = 's$', replacement = "" }]
"#;

    #[test]
    fn test_from_toml_str() {
        let bundle = LocaleBundle::from_toml_str(SAMPLE).unwrap();
        assert_eq!(bundle.code(), "xx");
        assert_eq!(bundle.name(), "Sample");
        assert_eq!(bundle.case_mode(), CaseMode::Capitalize);
        assert!(bundle.handles_possessives());
        assert!(bundle.is_preposition("of"));
        assert!(!bundle.is_preposition("in"));
        assert_eq!(bundle.rules(Direction::Plural).groups().len(), 2);
        assert_eq!(bundle.rules(Direction::Singular).rule_count(), 1);
    }

    #[test]
    fn test_categories_are_per_direction() {
        let bundle = LocaleBundle::from_toml_str(SAMPLE).unwrap();
        let plural = bundle.rules(Direction::Plural).categories();
        let singular = bundle.rules(Direction::Singular).categories();
        assert!(plural.contains("irregular", "Ox"));
        assert!(!singular.has_category("irregular"));
        assert!(singular.contains("uninflected", "Fish"));
    }

    #[test]
    fn test_bundle_inflects() {
        let bundle = LocaleBundle::from_toml_str(SAMPLE).unwrap();
        assert_eq!(bundle.pluralize("ox"), "Oxen");
        assert_eq!(bundle.pluralize("fish"), "Fish");
        assert_eq!(bundle.pluralize("cat"), "Cats");
        assert_eq!(bundle.singularize("cats"), "Cat");
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let text = SAMPLE.replace("pattern = 's$'", "pattern = '(s$'");
        let err = LocaleBundle::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, InflectError::InvalidBundle { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = LocaleBundle::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, InflectError::Io { .. }));
    }
}
