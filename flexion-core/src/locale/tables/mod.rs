//! Runtime tables for locale bundles
//!
//! Tables are compiled once per bundle and immutable afterwards.

pub mod categories;
pub mod rules;

pub use categories::CategorySets;
pub use rules::{Rule, RuleGroup, RuleTable};
