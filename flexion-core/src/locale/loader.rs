//! Locale registry
//!
//! Resolves locale tags to compiled bundles with fallback and caching.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use log::{debug, trace};

use crate::error::{InflectError, Result};
use crate::locale::runtime::LocaleBundle;
use crate::locale::simplify::fallback_candidates;
use crate::locale::source::{BundleSource, EmbeddedSource, DEFAULT_NAMESPACE};

/// Process-wide registry over the embedded locales
static DEFAULT_REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

/// Bundle cache in front of a [`BundleSource`]
///
/// Cache keys are `namespace + "." + candidate`. Each key is fetched from the
/// source at most once per registry.
pub struct LocaleRegistry {
    source: Box<dyn BundleSource>,
    cache: Mutex<HashMap<String, Arc<LocaleBundle>>>,
}

impl LocaleRegistry {
    pub fn new(source: impl BundleSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Registry serving only the embedded locales
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Resolve `locale` under `namespace`, falling back from the most specific
    /// candidate to the bare language
    pub fn load(&self, locale: &str, namespace: &str) -> Result<Arc<LocaleBundle>> {
        let mut cache = self.lock_cache();

        for candidate in fallback_candidates(locale) {
            let key = cache_key(namespace, &candidate);

            if let Some(bundle) = cache.get(&key) {
                trace!("Locale cache hit: {key}");
                return Ok(Arc::clone(bundle));
            }

            match self.source.fetch(namespace, &candidate)? {
                Some(config) => {
                    let bundle = Arc::new(LocaleBundle::from_config(&config)?);
                    debug!("Loaded locale bundle {key} for '{locale}'");
                    cache.insert(key, Arc::clone(&bundle));
                    return Ok(bundle);
                }
                None => trace!("No locale bundle at {key}"),
            }
        }

        Err(InflectError::UnsupportedLocale {
            locale: locale.to_string(),
            namespace: namespace.to_string(),
        })
    }

    /// Whether the resolved `candidate` under `namespace` is already cached
    pub fn is_cached(&self, namespace: &str, candidate: &str) -> bool {
        self.lock_cache()
            .contains_key(&cache_key(namespace, candidate))
    }

    pub fn cached_len(&self) -> usize {
        self.lock_cache().len()
    }

    /// Locale ids the underlying source can serve under `namespace`
    pub fn list_locales(&self, namespace: &str) -> Result<Vec<String>> {
        self.source.list_locales(namespace)
    }

    // Bundles are immutable once inserted, so a poisoned map is still usable
    fn lock_cache(&self) -> MutexGuard<'_, HashMap<String, Arc<LocaleBundle>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for LocaleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<String> = self.lock_cache().keys().cloned().collect();
        keys.sort();
        f.debug_struct("LocaleRegistry")
            .field("cached", &keys)
            .finish_non_exhaustive()
    }
}

fn cache_key(namespace: &str, candidate: &str) -> String {
    format!("{namespace}.{candidate}")
}

/// The process-wide registry over the embedded locales
pub fn default_registry() -> &'static LocaleRegistry {
    DEFAULT_REGISTRY.get_or_init(LocaleRegistry::embedded)
}

/// Resolve `locale` under `namespace` through the default registry
pub fn load_locale(locale: &str, namespace: &str) -> Result<Arc<LocaleBundle>> {
    default_registry().load(locale, namespace)
}

/// Locale ids shipped with the library
pub fn available_locales() -> Vec<String> {
    default_registry()
        .list_locales(DEFAULT_NAMESPACE)
        .unwrap_or_default()
}
