//! Ordered rule tables
//!
//! A table is a sequence of groups, each a sequence of rules. Lookup walks
//! groups in order and rules within a group in order; the first rule whose
//! condition holds produces the result.

use regex::Regex;

use super::categories::CategorySets;
use crate::error::{InflectError, Result};
use crate::locale::config::RuleConfig;

/// A single rewrite rule
#[derive(Debug, Clone)]
pub enum Rule {
    /// Fires when `pattern` matches the word
    Pattern { pattern: Regex, replacement: String },
    /// Fires when the word is a member of `category`
    CategoryGated {
        category: String,
        pattern: Regex,
        replacement: String,
    },
}

impl Rule {
    /// Compile a rule from its configuration
    pub fn compile(config: &RuleConfig, locale: &str) -> Result<Self> {
        let pattern = Regex::new(&config.pattern).map_err(|e| {
            InflectError::invalid(locale, format!("bad pattern '{}': {e}", config.pattern))
        })?;
        let replacement = config.replacement.clone();

        Ok(match &config.category {
            Some(category) => Rule::CategoryGated {
                category: category.clone(),
                pattern,
                replacement,
            },
            None => Rule::Pattern {
                pattern,
                replacement,
            },
        })
    }

    /// Rewrite `word` if this rule's condition holds
    ///
    /// Category rules still rewrite through their pattern, so the pattern must
    /// fit the endings of the category's members.
    pub fn apply(&self, word: &str, categories: &CategorySets) -> Option<String> {
        match self {
            Rule::Pattern {
                pattern,
                replacement,
            } => pattern
                .is_match(word)
                .then(|| pattern.replace_all(word, replacement.as_str()).into_owned()),
            Rule::CategoryGated {
                category,
                pattern,
                replacement,
            } => categories
                .contains(category, word)
                .then(|| pattern.replace_all(word, replacement.as_str()).into_owned()),
        }
    }

    pub fn pattern(&self) -> &str {
        match self {
            Rule::Pattern { pattern, .. } | Rule::CategoryGated { pattern, .. } => pattern.as_str(),
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Rule::Pattern { .. } => None,
            Rule::CategoryGated { category, .. } => Some(category.as_str()),
        }
    }
}

/// Rules sharing one precedence level
#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub name: Option<String>,
    pub rules: Vec<Rule>,
}

/// Rule groups plus the categories their gated rules refer to
#[derive(Debug, Clone)]
pub struct RuleTable {
    groups: Vec<RuleGroup>,
    categories: CategorySets,
}

impl RuleTable {
    pub fn new(groups: Vec<RuleGroup>, categories: CategorySets) -> Self {
        Self { groups, categories }
    }

    /// First matching rule's output, or `None` if nothing fires
    pub fn apply(&self, word: &str) -> Option<String> {
        self.groups
            .iter()
            .flat_map(|group| group.rules.iter())
            .find_map(|rule| rule.apply(word, &self.categories))
    }

    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    pub fn categories(&self) -> &CategorySets {
        &self.categories
    }

    pub fn rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.rules.len()).sum()
    }
}
