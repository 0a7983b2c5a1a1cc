//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Locale code for the new bundle
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub locale_code: String,

    /// Human-readable language name
    #[arg(short, long, value_name = "NAME", default_value = "Custom Language")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        std::fs::write(&self.output, template(&self.locale_code, &self.name))
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        if !quiet {
            println!("✓ Locale bundle template generated: {}", self.output.display());
            println!();
            println!("Next steps:");
            println!("1. Edit the rule groups and categories for your language");
            println!("2. Validate the bundle:");
            println!("   flexion validate -c {}", self.output.display());
            println!("3. Serve it from a locale directory:");
            println!(
                "   <DIR>/flexion/locales/{}.toml, then flexion --locale-dir <DIR> plural -l {} WORD",
                self.locale_code, self.locale_code
            );
        }

        Ok(())
    }
}

/// Starter bundle for `code`; compiles as-is
pub fn template(code: &str, name: &str) -> String {
    format!(
        r#"# Inflection rules for {name}
#
# Groups are tried in order, rules within a group in order; the first rule
# whose pattern matches (or whose category contains the word) wins.
# Patterns use regex syntax, replacements refer to groups as ${{1}}.

[metadata]
code = "{code}"
name = "{name}"
# "lower" or "capitalize"
case = "lower"
# English-style possessives (dog's -> dogs')
possessive = false

[compound]
# A compound whose second token is listed here inflects its first token
prepositions = ["of", "in"]

# Categories shared by both directions
[categories]
uninflected = ["sheep"]

# ---------------------------------------------------------------------------
# Plural
# ---------------------------------------------------------------------------

[plural.categories]
irregular = ["ox"]

[[plural.groups]]
name = "exceptions"
rules = [
    {{ pattern = '$', replacement = "", category = "uninflected" }},
    {{ pattern = '$', replacement = "en", category = "irregular" }},
]

[[plural.groups]]
name = "default"
rules = [
    {{ pattern = '$', replacement = "s" }},
]

# ---------------------------------------------------------------------------
# Singular
# ---------------------------------------------------------------------------

[singular.categories]
irregular = ["oxen"]

[[singular.groups]]
name = "exceptions"
rules = [
    {{ pattern = '$', replacement = "", category = "uninflected" }},
    {{ pattern = 'en$', replacement = "", category = "irregular" }},
]

[[singular.groups]]
name = "default"
rules = [
    {{ pattern = 's$', replacement = "" }},
]
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use flexion_core::LocaleBundle;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            locale_code: "it".to_string(),
            name: "Italian".to_string(),
            output: PathBuf::from("it.toml"),
        };

        let debug_str = format!("{args:?}");
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("Italian"));
        assert!(debug_str.contains("it.toml"));
    }

    #[test]
    fn test_template_compiles() {
        let bundle = LocaleBundle::from_toml_str(&template("xx", "Test")).unwrap();
        assert_eq!(bundle.code(), "xx");
        assert_eq!(bundle.pluralize("cat"), "cats");
        assert_eq!(bundle.pluralize("ox"), "oxen");
        assert_eq!(bundle.pluralize("sheep"), "sheep");
        assert_eq!(bundle.singularize("oxen"), "ox");
        assert_eq!(bundle.singularize("cats"), "cat");
        assert_eq!(bundle.pluralize("cup-of-tea"), "cups-of-tea");
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("xx.toml");

        let args = GenerateConfigArgs {
            locale_code: "xx".to_string(),
            name: "Test".to_string(),
            output: output_path.clone(),
        };

        assert!(args.execute(true).is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("code = \"xx\""));
        assert!(content.contains("${1}"));
    }

    #[test]
    fn test_execute_unwritable() {
        let args = GenerateConfigArgs {
            locale_code: "xx".to_string(),
            name: "Test".to_string(),
            output: PathBuf::from("/no/such/dir/xx.toml"),
        };
        let err = args.execute(true).unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
