//! List command implementation

use anyhow::Result;
use clap::ValueEnum;

use super::{GlobalArgs, ListCommands};
use crate::output::OutputFormat;
use crate::session::Session;

/// Execute a list subcommand
pub fn execute(subcommand: ListCommands, global: &GlobalArgs) -> Result<()> {
    let lines = match subcommand {
        ListCommands::Locales => locale_lines(&Session::from_args(global)?)?,
        ListCommands::Formats => format_lines(),
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// `code<TAB>name` for every locale under the session's namespace
fn locale_lines(session: &Session) -> Result<Vec<String>> {
    let registry = session.registry();
    registry
        .list_locales(session.namespace())?
        .into_iter()
        .map(|code| -> Result<String> {
            let bundle = registry.load(&code, session.namespace())?;
            Ok(format!("{code}\t{}", bundle.name()))
        })
        .collect()
}

fn format_lines() -> Vec<String> {
    OutputFormat::value_variants()
        .iter()
        .filter_map(|format| format.to_possible_value())
        .map(|value| value.get_name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use std::fs;
    use tempfile::TempDir;

    fn global(locale_dir: Option<std::path::PathBuf>) -> GlobalArgs {
        GlobalArgs {
            config: None,
            locale_dir,
            namespace: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_builtin_locales() {
        let session = Session::new(&global(None), CliConfig::default()).unwrap();
        assert_eq!(
            locale_lines(&session).unwrap(),
            vec!["de\tGerman", "en\tEnglish", "es\tSpanish", "fr\tFrench"]
        );
    }

    #[test]
    fn test_locale_dir_adds_locales() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("flexion").join("locales");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("it.toml"),
            crate::commands::generate_config::template("it", "Italian"),
        )
        .unwrap();

        let session =
            Session::new(&global(Some(temp_dir.path().to_path_buf())), CliConfig::default())
                .unwrap();
        let lines = locale_lines(&session).unwrap();
        assert_eq!(lines.len(), 5);
        assert!(lines.contains(&"it\tItalian".to_string()));
    }

    #[test]
    fn test_formats() {
        assert_eq!(format_lines(), vec!["text", "json", "markdown"]);
    }
}
