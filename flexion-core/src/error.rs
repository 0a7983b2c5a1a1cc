//! Error types for locale resolution and bundle loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the locale registry
#[derive(Debug, Error)]
pub enum InflectError {
    /// No candidate derived from the requested locale could be loaded
    #[error("Unsupported locale: '{locale}' (namespace '{namespace}')")]
    UnsupportedLocale { locale: String, namespace: String },

    /// Bundle data exists but cannot be compiled
    #[error("Invalid locale bundle '{locale}': {reason}")]
    InvalidBundle { locale: String, reason: String },

    /// Bundle file exists but cannot be read
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InflectError {
    pub(crate) fn invalid(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        InflectError::InvalidBundle {
            locale: locale.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is the fallback-exhaustion error
    pub fn is_unsupported_locale(&self) -> bool {
        matches!(self, InflectError::UnsupportedLocale { .. })
    }
}

/// Result type for inflection operations
pub type Result<T> = std::result::Result<T, InflectError>;
