//! Named word sets gating category rules

use std::collections::{HashMap, HashSet};

/// Category name -> member words
///
/// Membership is a literal, case-sensitive comparison; the engine
/// normalizes case before looking a word up.
#[derive(Debug, Clone, Default)]
pub struct CategorySets {
    sets: HashMap<String, HashSet<String>>,
}

impl CategorySets {
    pub fn new(sets: HashMap<String, HashSet<String>>) -> Self {
        Self { sets }
    }

    /// Whether `word` is a member of `category`; unknown categories contain nothing
    #[inline]
    pub fn contains(&self, category: &str, word: &str) -> bool {
        self.sets
            .get(category)
            .is_some_and(|members| members.contains(word))
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.sets.contains_key(category)
    }

    /// Category names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets() -> CategorySets {
        let mut sets = HashMap::new();
        sets.insert(
            "uninflected".to_string(),
            ["fish", "sheep"].iter().map(|s| s.to_string()).collect(),
        );
        sets.insert("empty".to_string(), HashSet::new());
        CategorySets::new(sets)
    }

    #[test]
    fn test_membership_is_literal() {
        let sets = sets();
        assert!(sets.contains("uninflected", "fish"));
        assert!(!sets.contains("uninflected", "Fish"));
        assert!(!sets.contains("uninflected", "goldfish"));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let sets = sets();
        assert!(!sets.contains("missing", "fish"));
        assert!(!sets.has_category("missing"));
        assert!(sets.has_category("empty"));
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(sets().names(), vec!["empty", "uninflected"]);
        assert_eq!(sets().len(), 2);
        assert!(CategorySets::default().is_empty());
    }
}
