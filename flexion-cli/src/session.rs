//! Settings resolved from flags, the config file and defaults

use anyhow::Result;
use clap::ValueEnum;
use flexion_core::LocaleRegistry;

use crate::commands::GlobalArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::locale_source::LocaleSource;
use crate::output::OutputFormat;

/// Everything a command needs once the command line is parsed
///
/// Flags override the config file, the config file overrides defaults.
#[derive(Debug)]
pub struct Session {
    config: CliConfig,
    source: LocaleSource,
    registry: LocaleRegistry,
    namespace: String,
}

impl Session {
    pub fn from_args(global: &GlobalArgs) -> Result<Self> {
        let config = match &global.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        Self::new(global, config)
    }

    pub fn new(global: &GlobalArgs, config: CliConfig) -> Result<Self> {
        let source = LocaleSource::from_dir(
            global
                .locale_dir
                .clone()
                .or_else(|| config.inflection.locale_dir.clone()),
        );
        let namespace = global
            .namespace
            .clone()
            .unwrap_or_else(|| config.inflection.namespace.clone());

        log::debug!("Locale source: {}", source.display_name());
        log::debug!("Namespace: {namespace}");

        Ok(Self {
            registry: source.clone().into_registry()?,
            source,
            config,
            namespace,
        })
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn source(&self) -> &LocaleSource {
        &self.source
    }

    /// `--language` if given, else the configured default
    pub fn language<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.unwrap_or(&self.config.inflection.default_language)
    }

    /// `--format` if given, else the configured format
    pub fn output_format(&self, flag: Option<OutputFormat>) -> Result<OutputFormat> {
        match flag {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&self.config.output.format, true).map_err(|_| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    self.config.output.format
                ))
                .into()
            }),
        }
    }

    pub fn pretty_json(&self) -> bool {
        self.config.output.pretty_json
    }
}
