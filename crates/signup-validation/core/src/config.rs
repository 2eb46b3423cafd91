// File: src/config.rs
// Purpose: Validation settings parsed from signup-validation.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::date::DEFAULT_MAX_AGE;
use crate::postal::PostalPatterns;

pub const DEFAULT_CONFIG_FILE: &str = "signup-validation.toml";

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    #[serde(default)]
    pub date_of_birth: DateOfBirthConfig,

    /// Extra postal code patterns keyed by exact country name.
    /// Built-in countries cannot be overridden.
    #[serde(default)]
    pub postal_codes: BTreeMap<String, String>,
}

/// Date of birth rule settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateOfBirthConfig {
    #[serde(default = "default_max_age")]
    pub max_age: u32,
}

fn default_max_age() -> u32 {
    DEFAULT_MAX_AGE
}

impl Default for DateOfBirthConfig {
    fn default() -> Self {
        Self {
            max_age: default_max_age(),
        }
    }
}

impl ValidationConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ValidationConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        // Surface bad patterns at load time rather than on first use
        config.postal_patterns()?;

        Ok(config)
    }

    /// Load configuration from default path (./signup-validation.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Compile the postal code table
    pub fn postal_patterns(&self) -> Result<PostalPatterns> {
        self.postal_codes
            .iter()
            .try_fold(PostalPatterns::new(), |patterns, (country, pattern)| {
                patterns
                    .with_country(country.as_str(), pattern)
                    .with_context(|| format!("Invalid postal code pattern for {}", country))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert_eq!(config.date_of_birth.max_age, 120);
        assert!(config.postal_codes.is_empty());
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<ValidationConfig>("").unwrap_or_default();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_custom_settings() {
        let toml = r#"
            [date_of_birth]
            max_age = 100

            [postal_codes]
            "Canada" = "^[A-Z]\\d[A-Z] ?\\d[A-Z]\\d$"
        "#;
        let config: ValidationConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.date_of_birth.max_age, 100);

        let patterns = config.postal_patterns().unwrap();
        assert!(patterns.validate("K1A 0B1", "Canada").is_valid());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ValidationConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[date_of_birth]\nmax_age = 99").unwrap();

        let config = ValidationConfig::load(file.path()).unwrap();
        assert_eq!(config.date_of_birth.max_age, 99);
    }

    #[test]
    fn test_bad_pattern_rejected_on_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[postal_codes]\n\"Nowhere\" = \"(\"").unwrap();

        let err = ValidationConfig::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Nowhere"));
    }
}
