//! Locale data sources
//!
//! A source answers "is there a bundle named `candidate` under `namespace`?".
//! `Ok(None)` means not found and lets the registry try its next fallback
//! candidate; `Err` means the data exists but is unusable.

use std::path::PathBuf;

use crate::error::{InflectError, Result};
use crate::locale::config::LocaleConfig;

/// Namespace the shipped locales are served under
pub const DEFAULT_NAMESPACE: &str = "flexion.locales";

/// Provider of locale configurations
pub trait BundleSource: Send + Sync {
    /// Look up the configuration for `candidate` under `namespace`
    fn fetch(&self, namespace: &str, candidate: &str) -> Result<Option<LocaleConfig>>;

    /// Locale ids available under `namespace`, sorted
    fn list_locales(&self, namespace: &str) -> Result<Vec<String>>;
}

macro_rules! embed_locale {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

const EMBEDDED_LOCALES: [(&str, &str); 4] = [
    embed_locale!("de", "../../configs/locales/de.toml"),
    embed_locale!("en", "../../configs/locales/en.toml"),
    embed_locale!("es", "../../configs/locales/es.toml"),
    embed_locale!("fr", "../../configs/locales/fr.toml"),
];

/// Locales compiled into the library
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl BundleSource for EmbeddedSource {
    fn fetch(&self, namespace: &str, candidate: &str) -> Result<Option<LocaleConfig>> {
        if namespace != DEFAULT_NAMESPACE {
            return Ok(None);
        }

        let Some((code, toml_content)) = EMBEDDED_LOCALES
            .iter()
            .find(|(code, _)| *code == candidate)
        else {
            return Ok(None);
        };

        let config = LocaleConfig::from_toml_str(toml_content, code)?;
        check_code(&config, candidate)?;
        Ok(Some(config))
    }

    fn list_locales(&self, namespace: &str) -> Result<Vec<String>> {
        if namespace != DEFAULT_NAMESPACE {
            return Ok(Vec::new());
        }
        Ok(EMBEDDED_LOCALES
            .iter()
            .map(|(code, _)| code.to_string())
            .collect())
    }
}

/// Host-supplied locales stored as `<root>/<namespace path>/<candidate>.toml`
///
/// Dots in the namespace become directory separators.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the bundles of `namespace`, or `None` for names that
    /// would escape the root
    fn namespace_dir(&self, namespace: &str) -> Option<PathBuf> {
        let mut dir = self.root.clone();
        for segment in namespace.split('.') {
            if !is_safe_segment(segment) {
                return None;
            }
            dir.push(segment);
        }
        Some(dir)
    }
}

impl BundleSource for DirectorySource {
    fn fetch(&self, namespace: &str, candidate: &str) -> Result<Option<LocaleConfig>> {
        if !is_safe_segment(candidate) {
            return Ok(None);
        }
        let Some(dir) = self.namespace_dir(namespace) else {
            return Ok(None);
        };

        let path = dir.join(format!("{candidate}.toml"));
        if !path.is_file() {
            return Ok(None);
        }

        let config = LocaleConfig::from_file(&path)?;
        check_code(&config, candidate)?;
        Ok(Some(config))
    }

    fn list_locales(&self, namespace: &str) -> Result<Vec<String>> {
        let Some(dir) = self.namespace_dir(namespace) else {
            return Ok(Vec::new());
        };
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&dir).map_err(|source| InflectError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut locales = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| InflectError::Io {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    locales.push(stem.to_string());
                }
            }
        }
        locales.sort();
        Ok(locales)
    }
}

/// Ordered stack of sources; the first one that knows a candidate wins
#[derive(Default)]
pub struct LayeredSource {
    layers: Vec<Box<dyn BundleSource>>,
}

impl LayeredSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source below the existing ones
    pub fn with_layer(mut self, source: impl BundleSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl BundleSource for LayeredSource {
    fn fetch(&self, namespace: &str, candidate: &str) -> Result<Option<LocaleConfig>> {
        for layer in &self.layers {
            if let Some(config) = layer.fetch(namespace, candidate)? {
                return Ok(Some(config));
            }
        }
        Ok(None)
    }

    fn list_locales(&self, namespace: &str) -> Result<Vec<String>> {
        let mut locales = Vec::new();
        for layer in &self.layers {
            locales.extend(layer.list_locales(namespace)?);
        }
        locales.sort();
        locales.dedup();
        Ok(locales)
    }
}

fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && !segment.contains(['/', '\\'])
}

/// The bundle served for `candidate` must declare that code
fn check_code(config: &LocaleConfig, candidate: &str) -> Result<()> {
    if config.metadata.code.eq_ignore_ascii_case(candidate) {
        Ok(())
    } else {
        Err(InflectError::invalid(
            candidate,
            format!(
                "config code mismatch: expected {candidate}, got {}",
                config.metadata.code
            ),
        ))
    }
}
