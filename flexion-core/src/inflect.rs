//! Inflection engine
//!
//! Turns a word into its plural or singular form using a [`LocaleBundle`]'s
//! rule tables. Steps, in order:
//!
//! 1. possessive suffixes are peeled off and re-attached (bundles that opt in)
//! 2. case normalization
//! 3. words made only of punctuation, symbols or digits pass through
//! 4. compounds inflect their head token only
//! 5. the first matching rule rewrites the word

use std::fmt;
use std::sync::OnceLock;

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locale::loader::{default_registry, LocaleRegistry};
use crate::locale::runtime::LocaleBundle;
use crate::locale::source::DEFAULT_NAMESPACE;

/// Language used when the caller does not name one
pub const DEFAULT_LANGUAGE: &str = "en";

static NON_WORD: OnceLock<Regex> = OnceLock::new();

/// Matches strings without letters, including the empty string
fn non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(r"^[\p{P}\p{S}\p{N}]*$").expect("non-word pattern is valid"))
}

/// Which way to inflect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Plural,
    Singular,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Plural => "plural",
            Direction::Singular => "singular",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inflect `word` with an already resolved bundle
pub(crate) fn inflect_with(bundle: &LocaleBundle, word: &str, direction: Direction) -> String {
    if bundle.handles_possessives() {
        if let Some(inflected) = inflect_possessive(bundle, word, direction) {
            return inflected;
        }
    }
    inflect_word(bundle, word, direction)
}

/// `dog's` <-> `dogs'`
///
/// Returns `None` when `word` is not possessive or its stem is not a word.
fn inflect_possessive(bundle: &LocaleBundle, word: &str, direction: Direction) -> Option<String> {
    let stem = word
        .strip_suffix("'s")
        .or_else(|| word.strip_suffix('\''))?;
    if non_word().is_match(stem) {
        return None;
    }

    let inflected = inflect_word(bundle, stem, direction);
    let suffix = if inflected.ends_with('s') { "'" } else { "'s" };
    Some(format!("{inflected}{suffix}"))
}

fn inflect_word(bundle: &LocaleBundle, word: &str, direction: Direction) -> String {
    let word = bundle.case_mode().apply(word);

    if non_word().is_match(&word) {
        return word;
    }

    let tokens: Vec<&str> = word.split(['-', ' ']).collect();
    if tokens.len() > 1 {
        let head = if bundle.is_preposition(tokens[1]) {
            tokens[0]
        } else {
            tokens[tokens.len() - 1]
        };
        let inflected = inflect_word(bundle, head, direction);
        trace!("Compound '{word}': head '{head}' -> '{inflected}'");
        // First textual occurrence, even when the head text repeats
        return word.replacen(head, &inflected, 1);
    }

    bundle.rules(direction).apply(&word).unwrap_or(word)
}

/// Plural form of `word` in `language`, through the default registry
///
/// ```
/// use flexion_core::pluralize;
///
/// assert_eq!(pluralize("child", "en").unwrap(), "children");
/// assert_eq!(pluralize("mother-in-law", "en").unwrap(), "mothers-in-law");
/// assert!(pluralize("x", "hu").is_err());
/// ```
pub fn pluralize(word: &str, language: &str) -> Result<String> {
    inflect(word, language, Direction::Plural)
}

/// Singular form of `word` in `language`, through the default registry
pub fn singularize(word: &str, language: &str) -> Result<String> {
    inflect(word, language, Direction::Singular)
}

/// Inflect `word` in `language` through the default registry
pub fn inflect(word: &str, language: &str, direction: Direction) -> Result<String> {
    Inflector::default().inflect(word, language, direction)
}

/// Inflection bound to one registry and namespace
#[derive(Debug, Clone)]
pub struct Inflector<'r> {
    registry: &'r LocaleRegistry,
    namespace: String,
}

impl<'r> Inflector<'r> {
    /// Inflector over `registry`'s default namespace
    pub fn new(registry: &'r LocaleRegistry) -> Self {
        Self {
            registry,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn pluralize(&self, word: &str, language: &str) -> Result<String> {
        self.inflect(word, language, Direction::Plural)
    }

    pub fn singularize(&self, word: &str, language: &str) -> Result<String> {
        self.inflect(word, language, Direction::Singular)
    }

    pub fn inflect(&self, word: &str, language: &str, direction: Direction) -> Result<String> {
        let bundle = self.registry.load(language, &self.namespace)?;
        Ok(inflect_with(&bundle, word, direction))
    }
}

impl Default for Inflector<'static> {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InflectError;

    fn en() -> std::sync::Arc<LocaleBundle> {
        crate::locale::loader::load_locale("en", DEFAULT_NAMESPACE).unwrap()
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::Plural.as_str(), "plural");
        assert_eq!(Direction::Singular.to_string(), "singular");
    }

    #[test]
    fn test_regular_words() {
        assert_eq!(pluralize("night", "en").unwrap(), "nights");
        assert_eq!(singularize("nights", "en").unwrap(), "night");
    }

    #[test]
    fn test_irregular_words() {
        assert_eq!(pluralize("child", "en").unwrap(), "children");
        assert_eq!(singularize("children", "en").unwrap(), "child");
    }

    #[test]
    fn test_uninflected_category() {
        assert_eq!(pluralize("fish", "en").unwrap(), "fish");
        assert_eq!(singularize("fish", "en").unwrap(), "fish");
    }

    #[test]
    fn test_compound_head_selection() {
        assert_eq!(pluralize("mother-in-law", "en").unwrap(), "mothers-in-law");
        assert_eq!(pluralize("vice-president", "en").unwrap(), "vice-presidents");
        assert_eq!(singularize("mothers-in-law", "en").unwrap(), "mother-in-law");
    }

    #[test]
    fn test_compound_replaces_first_occurrence() {
        assert_eq!(
            pluralize("president-president", "en").unwrap(),
            "presidents-president"
        );
    }

    #[test]
    fn test_possessives() {
        assert_eq!(pluralize("dog's", "en").unwrap(), "dogs'");
        assert_eq!(singularize("dogs'", "en").unwrap(), "dog's");
        assert_eq!(pluralize("child's", "en").unwrap(), "children's");
    }

    #[test]
    fn test_possessive_needs_a_word_stem() {
        assert_eq!(pluralize("'", "en").unwrap(), "'");
        assert_eq!(pluralize("''", "en").unwrap(), "''");
    }

    #[test]
    fn test_non_words_pass_through() {
        assert_eq!(pluralize("??", "en").unwrap(), "??");
        assert_eq!(singularize("123", "en").unwrap(), "123");
        assert_eq!(pluralize("", "en").unwrap(), "");
        assert_eq!(pluralize("$%", "fr").unwrap(), "$%");
    }

    #[test]
    fn test_case_is_normalized() {
        assert_eq!(pluralize("Night", "en").unwrap(), "nights");
        assert_eq!(pluralize("kind", "de").unwrap(), "Kinder");
    }

    #[test]
    fn test_unsupported_language() {
        let err = pluralize("x", "hu").unwrap_err();
        assert!(matches!(err, InflectError::UnsupportedLocale { ref locale, .. } if locale == "hu"));
    }

    #[test]
    fn test_bundle_and_inflector_agree() {
        let registry = LocaleRegistry::embedded();
        let inflector = Inflector::new(&registry);
        assert_eq!(inflector.namespace(), DEFAULT_NAMESPACE);
        for word in ["box", "city", "wolf", "mouse"] {
            assert_eq!(
                inflector.pluralize(word, "en_GB").unwrap(),
                en().pluralize(word)
            );
        }
    }

    #[test]
    fn test_inflector_namespace() {
        let registry = LocaleRegistry::embedded();
        let inflector = Inflector::new(&registry).with_namespace("elsewhere");
        assert!(inflector.pluralize("cat", "en").unwrap_err().is_unsupported_locale());
    }
}
