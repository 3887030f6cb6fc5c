//! The `regexPattern` provider.

use regex::{Regex, RegexBuilder};
use warden_core::error::PolicyConfigError;
use warden_core::utils::RegexPatternSettings;

use super::{is_blank, PolicyProvider, ValidatedConfig};

/// Clause name handled by [`RegexPatternProvider`].
pub const REGEX_PATTERN_ID: &str = "regexPattern";

/// Validated configuration of a `regexPattern` clause.
#[derive(Debug, Clone)]
pub struct RegexPatternConfig {
    pattern: Regex,
}

impl RegexPatternConfig {
    /// The compiled pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// The pattern source, exactly as written in the clause.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Provider for the `regexPattern` clause.
///
/// The argument is compiled verbatim; surrounding whitespace is part of the
/// pattern.
#[derive(Debug, Clone, Default)]
pub struct RegexPatternProvider {
    settings: RegexPatternSettings,
}

impl RegexPatternProvider {
    /// Create a provider with the given limits.
    pub fn new(settings: RegexPatternSettings) -> Self {
        Self { settings }
    }
}

impl PolicyProvider for RegexPatternProvider {
    fn id(&self) -> &str {
        REGEX_PATTERN_ID
    }

    fn parse_config(&self, argument: Option<&str>) -> Result<ValidatedConfig, PolicyConfigError> {
        let pattern = match argument {
            Some(pattern) if !is_blank(argument) => pattern,
            _ => return Err(PolicyConfigError::MissingArgument),
        };

        let pattern = RegexBuilder::new(pattern)
            .size_limit(self.settings.size_limit)
            .build()
            .map_err(|e| PolicyConfigError::InvalidArgument {
                argument: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Box::new(RegexPatternConfig { pattern }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pattern() {
        let provider = RegexPatternProvider::default();
        let config = provider.parse_config(Some("^[a-z]+$")).unwrap();
        let config = config.downcast_ref::<RegexPatternConfig>().unwrap();

        assert_eq!(config.as_str(), "^[a-z]+$");
        assert!(config.pattern().is_match("alice"));
        assert!(!config.pattern().is_match("Alice"));
    }

    #[test]
    fn test_missing_pattern() {
        let provider = RegexPatternProvider::default();
        assert!(matches!(
            provider.parse_config(None),
            Err(PolicyConfigError::MissingArgument)
        ));
        assert!(matches!(
            provider.parse_config(Some(" ")),
            Err(PolicyConfigError::MissingArgument)
        ));
    }

    #[test]
    fn test_unbalanced_pattern() {
        let provider = RegexPatternProvider::default();
        match provider.parse_config(Some("(")) {
            Err(PolicyConfigError::InvalidArgument { argument, reason }) => {
                assert_eq!(argument, "(");
                assert!(!reason.is_empty());
            }
            _ => panic!("Expected an invalid argument error"),
        }
    }

    #[test]
    fn test_size_limit() {
        let provider = RegexPatternProvider::new(RegexPatternSettings { size_limit: 16 });
        assert!(provider.parse_config(Some("[a-z]{100}")).is_err());
    }
}
