//! Configuration file for persian-fix
//!
//! ```toml
//! [fixer]
//! shaped_input = "reject"   # allow | reject | pass_through
//! visual_order = true
//! ```

use crate::cli::Cli;
use anyhow::{Context, Result};
use persian_text::FixerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Settings forwarded to the fixer
    pub fixer: FixerConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration")
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the effective configuration: file (if any), then CLI overrides
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(policy) = cli.shaped_input_policy() {
            config.fixer.shaped_input = policy;
        }
        if cli.no_reorder {
            config.fixer.visual_order = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use persian_text::ShapedInputPolicy;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_fixer_section() {
        let config = AppConfig::from_toml(
            "[fixer]\nshaped_input = \"pass_through\"\nvisual_order = false\n",
        )
        .unwrap();
        assert_eq!(config.fixer.shaped_input, ShapedInputPolicy::PassThrough);
        assert!(!config.fixer.visual_order);
    }

    #[test]
    fn test_unknown_policy_is_error() {
        assert!(AppConfig::from_toml("[fixer]\nshaped_input = \"sometimes\"\n").is_err());
    }

    #[test]
    fn test_round_trip() {
        let config = AppConfig {
            fixer: FixerConfig::default().shaped_input(ShapedInputPolicy::Reject),
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_from_file_with_cli_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[fixer]\nshaped_input = \"reject\"").unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["persian-fix", "--config", path, "--no-reorder"]).unwrap();
        let config = AppConfig::resolve(&cli).unwrap();
        assert_eq!(config.fixer.shaped_input, ShapedInputPolicy::Reject);
        assert!(!config.fixer.visual_order);

        let cli = Cli::try_parse_from([
            "persian-fix", "--config", path, "--shaped-input", "allow",
        ])
        .unwrap();
        let config = AppConfig::resolve(&cli).unwrap();
        assert_eq!(config.fixer.shaped_input, ShapedInputPolicy::Allow);
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = AppConfig::load(Path::new("/nonexistent/persian-fix.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/persian-fix.toml"));
    }
}
