//! The `notEmail` provider.

use warden_core::error::PolicyConfigError;

use super::{is_blank, PolicyProvider, ValidatedConfig};

/// Clause name handled by [`NotEmailProvider`].
pub const NOT_EMAIL_ID: &str = "notEmail";

/// Validated configuration of a `notEmail` clause. The clause takes no argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotEmailConfig;

/// Provider for the `notEmail` clause.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotEmailProvider;

impl PolicyProvider for NotEmailProvider {
    fn id(&self) -> &str {
        NOT_EMAIL_ID
    }

    fn parse_config(&self, argument: Option<&str>) -> Result<ValidatedConfig, PolicyConfigError> {
        match argument {
            Some(argument) if !is_blank(Some(argument)) => {
                Err(PolicyConfigError::UnexpectedArgument(argument.to_string()))
            }
            _ => Ok(Box::new(NotEmailConfig)),
        }
    }
}
