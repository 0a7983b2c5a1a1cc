//! Locale source management for CLI

use std::path::PathBuf;

use anyhow::Result;
use flexion_core::{DirectorySource, EmbeddedSource, LayeredSource, LocaleRegistry};

use crate::error::CliError;

/// Where locale bundles come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleSource {
    /// Built-in locales only
    BuiltIn,
    /// A directory of bundles consulted before the built-in locales
    Layered {
        /// Root of the `<namespace path>/<locale>.toml` tree
        dir: PathBuf,
    },
}

impl LocaleSource {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => LocaleSource::Layered { dir },
            None => LocaleSource::BuiltIn,
        }
    }

    /// Get the display name for the locale source
    pub fn display_name(&self) -> String {
        match self {
            LocaleSource::BuiltIn => "Built-in".to_string(),
            LocaleSource::Layered { dir } => format!("{} + built-in", dir.display()),
        }
    }

    /// Registry serving this source
    pub fn into_registry(self) -> Result<LocaleRegistry> {
        match self {
            LocaleSource::BuiltIn => Ok(LocaleRegistry::embedded()),
            LocaleSource::Layered { dir } => {
                if !dir.is_dir() {
                    return Err(CliError::LocaleDirNotFound(dir.display().to_string()).into());
                }
                Ok(LocaleRegistry::new(
                    LayeredSource::new()
                        .with_layer(DirectorySource::new(dir))
                        .with_layer(EmbeddedSource),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_display_name() {
        assert_eq!(LocaleSource::BuiltIn.display_name(), "Built-in");
        let layered = LocaleSource::from_dir(Some(PathBuf::from("locales")));
        assert_eq!(layered.display_name(), "locales + built-in");
    }

    #[test]
    fn test_builtin_registry() {
        let registry = LocaleSource::from_dir(None).into_registry().unwrap();
        assert!(registry.load("en", flexion_core::DEFAULT_NAMESPACE).is_ok());
    }

    #[test]
    fn test_layered_registry_keeps_builtins() {
        let temp_dir = TempDir::new().unwrap();
        let registry = LocaleSource::from_dir(Some(temp_dir.path().to_path_buf()))
            .into_registry()
            .unwrap();
        assert!(registry.load("de", flexion_core::DEFAULT_NAMESPACE).is_ok());
    }

    #[test]
    fn test_missing_dir() {
        let err = LocaleSource::from_dir(Some(PathBuf::from("/no/such/locales")))
            .into_registry()
            .unwrap_err();
        assert!(err.to_string().contains("Locale directory not found"));
    }
}
