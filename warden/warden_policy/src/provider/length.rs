//! The `length` provider.
//!
//! Accepts `length`, `length(min)` or `length(min,max)`.

use warden_core::error::PolicyConfigError;
use warden_core::utils::LengthSettings;

use super::{is_blank, PolicyProvider, ValidatedConfig};

/// Clause name handled by [`LengthProvider`].
pub const LENGTH_ID: &str = "length";

/// Validated configuration of a `length` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthConfig {
    /// Minimum number of characters.
    pub min: usize,

    /// Maximum number of characters.
    pub max: usize,
}

/// Provider for the `length` clause.
#[derive(Debug, Clone, Default)]
pub struct LengthProvider {
    settings: LengthSettings,
}

impl LengthProvider {
    /// Create a provider with the given bounds.
    pub fn new(settings: LengthSettings) -> Self {
        Self { settings }
    }

    fn parse_bound(argument: &str, part: &str) -> Result<usize, PolicyConfigError> {
        part.trim()
            .parse::<usize>()
            .map_err(|e| PolicyConfigError::InvalidArgument {
                argument: argument.to_string(),
                reason: format!("'{}' is not a non-negative integer: {}", part.trim(), e),
            })
    }

    fn parse_length(&self, argument: Option<&str>) -> Result<LengthConfig, PolicyConfigError> {
        let argument = match argument {
            Some(argument) if !is_blank(Some(argument)) => argument,
            _ => {
                return Ok(LengthConfig {
                    min: self.settings.default_min,
                    max: self.settings.default_max,
                })
            }
        };

        let parts: Vec<&str> = argument.split(',').collect();
        let config = match parts.as_slice() {
            [min] => LengthConfig {
                min: Self::parse_bound(argument, min)?,
                max: self.settings.default_max,
            },
            [min, max] => LengthConfig {
                min: Self::parse_bound(argument, min)?,
                max: Self::parse_bound(argument, max)?,
            },
            _ => {
                return Err(PolicyConfigError::InvalidArgument {
                    argument: argument.to_string(),
                    reason: "expected 'min' or 'min,max'".to_string(),
                })
            }
        };

        if config.max > self.settings.hard_max {
            return Err(PolicyConfigError::OutOfRange(format!(
                "maximum {} exceeds {}",
                config.max, self.settings.hard_max
            )));
        }
        if config.min > config.max {
            return Err(PolicyConfigError::OutOfRange(format!(
                "minimum {} exceeds maximum {}",
                config.min, config.max
            )));
        }

        Ok(config)
    }
}

impl PolicyProvider for LengthProvider {
    fn id(&self) -> &str {
        LENGTH_ID
    }

    fn parse_config(&self, argument: Option<&str>) -> Result<ValidatedConfig, PolicyConfigError> {
        Ok(Box::new(self.parse_length(argument)?))
    }
}
