//! Rule-based pluralization and singularization
//!
//! Each supported language is described by a locale bundle: ordered groups of
//! regex rewrite rules, named word categories that gate exception rules, and
//! the prepositions used to find the head of a compound word. Bundles are
//! authored in TOML, resolved through a caching registry with
//! territory-to-language fallback, and applied by a small inflection engine.
//!
//! # Shipped locales
//!
//! English (`en`), French (`fr`), German (`de`) and Spanish (`es`) are embedded
//! in the library under [`DEFAULT_NAMESPACE`]. Hosts can serve more through a
//! [`DirectorySource`] or their own [`BundleSource`].
//!
//! # Example
//!
//! ```rust
//! use flexion_core::{pluralize, singularize, Inflector, LocaleRegistry};
//!
//! assert_eq!(pluralize("night", "en").unwrap(), "nights");
//! assert_eq!(singularize("chevaux", "fr_FR.UTF-8").unwrap(), "cheval");
//!
//! // Unknown languages are an error, never a silent English fallback
//! assert!(pluralize("x", "hu").unwrap_err().is_unsupported_locale());
//!
//! // Independent registries keep independent caches
//! let registry = LocaleRegistry::embedded();
//! let inflector = Inflector::new(&registry);
//! assert_eq!(inflector.pluralize("Kind", "de").unwrap(), "Kinder");
//! ```

pub mod error;
pub mod inflect;
pub mod locale;

pub use error::{InflectError, Result};
pub use inflect::{inflect, pluralize, singularize, Direction, Inflector, DEFAULT_LANGUAGE};
pub use locale::{
    available_locales, default_registry, fallback_candidates, load_locale, simplify_locale,
    BundleSource, CaseMode, DirectorySource, EmbeddedSource, LayeredSource, LocaleBundle,
    LocaleConfig, LocaleRegistry, DEFAULT_NAMESPACE,
};
