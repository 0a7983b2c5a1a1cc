//! Locale data: configuration schema, compiled bundles, sources and the
//! caching registry

pub mod config;
pub mod loader;
pub mod runtime;
pub mod simplify;
pub mod source;
pub mod tables;

pub use config::{CaseMode, LocaleConfig};
pub use loader::{available_locales, default_registry, load_locale, LocaleRegistry};
pub use runtime::LocaleBundle;
pub use simplify::{fallback_candidates, simplify_locale};
pub use source::{BundleSource, DirectorySource, EmbeddedSource, LayeredSource, DEFAULT_NAMESPACE};
