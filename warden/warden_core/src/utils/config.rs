//! Configuration utilities.
//!
//! This module defines the TOML configuration file read by the Warden
//! binaries and the bounds used by the built-in policy providers.
//!
//! ```toml
//! log_level = "debug"
//! default_policy = "length(3,255) and notEmail"
//!
//! [length]
//! default_min = 3
//! default_max = 255
//! hard_max = 255
//!
//! [regex_pattern]
//! size_limit = 1048576
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::utils::LogLevel;

/// Top-level Warden configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WardenConfig {
    /// Minimum level of log records to emit.
    pub log_level: LogLevel,

    /// Policy applied when none is given explicitly.
    pub default_policy: Option<String>,

    /// Bounds for the `length` provider.
    pub length: LengthSettings,

    /// Limits for the `regexPattern` provider.
    pub regex_pattern: RegexPatternSettings,
}

/// Bounds for the `length` provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthSettings {
    /// Minimum length used when the clause has no argument.
    pub default_min: usize,

    /// Maximum length used when the clause has no argument or only a minimum.
    pub default_max: usize,

    /// Largest maximum a clause may request.
    pub hard_max: usize,
}

impl Default for LengthSettings {
    fn default() -> Self {
        Self {
            default_min: 3,
            default_max: 255,
            hard_max: 255,
        }
    }
}

/// Limits for the `regexPattern` provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexPatternSettings {
    /// Approximate upper bound on the compiled size of a pattern, in bytes.
    pub size_limit: usize,
}

impl Default for RegexPatternSettings {
    fn default() -> Self {
        Self {
            size_limit: 1024 * 1024,
        }
    }
}

impl WardenConfig {
    /// Parse a configuration from TOML text.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Arguments
    ///
    /// * `text` - The TOML document.
    ///
    /// # Returns
    ///
    /// * `Ok(WardenConfig)` - The parsed and checked configuration.
    /// * `Err(ConfigError)` - If the text is not valid TOML or holds inconsistent values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: WardenConfig = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    /// Load a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    fn check(&self) -> Result<(), ConfigError> {
        let length = &self.length;
        if length.default_min > length.default_max {
            return Err(ConfigError::InvalidValue(format!(
                "length.default_min ({}) exceeds length.default_max ({})",
                length.default_min, length.default_max
            )));
        }
        if length.default_max > length.hard_max {
            return Err(ConfigError::InvalidValue(format!(
                "length.default_max ({}) exceeds length.hard_max ({})",
                length.default_max, length.hard_max
            )));
        }
        if self.regex_pattern.size_limit == 0 {
            return Err(ConfigError::InvalidValue(
                "regex_pattern.size_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WardenConfig::from_toml_str("").unwrap();
        assert_eq!(config, WardenConfig::default());
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.default_policy, None);
        assert_eq!(config.length.default_min, 3);
        assert_eq!(config.length.default_max, 255);
        assert_eq!(config.regex_pattern.size_limit, 1024 * 1024);
    }

    #[test]
    fn test_partial_override() {
        let config = WardenConfig::from_toml_str(
            r#"
            log_level = "warn"
            default_policy = "length(4,32)"

            [length]
            default_min = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Warning);
        assert_eq!(config.default_policy.as_deref(), Some("length(4,32)"));
        assert_eq!(config.length.default_min, 5);
        assert_eq!(config.length.default_max, 255);
    }

    #[test]
    fn test_inconsistent_length_bounds() {
        let result = WardenConfig::from_toml_str(
            r#"
            [length]
            default_min = 10
            default_max = 5
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));

        let result = WardenConfig::from_toml_str(
            r#"
            [length]
            default_max = 300
            "#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let result = WardenConfig::from_toml_str("log_level = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = WardenConfig::from_toml_str("log_level = \"loud\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
