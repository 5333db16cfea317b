//! Configuration module

use crate::{commands::OutputFormat, error::CliError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tansaku_engine::MatchConfig;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Matching configuration
    #[serde(default)]
    pub matching: MatchConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config
            .matching
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tansaku_engine::DuplicatePolicy;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tansaku.toml");
        fs::write(
            &path,
            r#"
[matching]
allow_overlaps = false
case_insensitive = true
duplicates = "deduplicate"

[output]
default_format = "json"
pretty_json = false
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert!(!config.matching.allow_overlaps);
        assert!(config.matching.case_insensitive);
        assert!(!config.matching.only_whole_words);
        assert_eq!(config.matching.duplicates, DuplicatePolicy::Deduplicate);
        assert_eq!(config.output.default_format, OutputFormat::Json);
        assert!(!config.output.pretty_json);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.matching, MatchConfig::default());
        assert_eq!(config.output.default_format, OutputFormat::Text);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[matching]\nmax_keyword_len = 0\n").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("max_keyword_len"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[matching\nallow_overlaps = ").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
