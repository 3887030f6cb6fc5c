//! Error types for the Warden policy system.
//!
//! The root error type, `Error`, wraps the subsystem errors so callers can
//! handle every failure uniformly at the top level while still matching on
//! the specific kind when they need to.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for the Warden system.
#[derive(Debug, Error)]
pub enum Error {
    /// Policy validation errors
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// Provider registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while validating a policy against the provider registry.
///
/// Both variants abort the whole validation; no partially validated policy
/// is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// No provider is registered for the clause name
    #[error("Username policy not found: {0}")]
    NotFound(String),

    /// A known provider rejected the clause argument
    #[error("Invalid config for {policy}: {reason}")]
    InvalidConfig {
        /// The clause name.
        policy: String,

        /// The provider's reason for rejecting the argument.
        reason: String,
    },
}

impl PolicyError {
    /// The clause name this error refers to.
    pub fn policy_name(&self) -> &str {
        match self {
            Self::NotFound(name) => name,
            Self::InvalidConfig { policy, .. } => policy,
        }
    }
}

/// Errors a provider reports when it cannot interpret a clause argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyConfigError {
    /// The clause requires an argument but none was given
    #[error("missing argument")]
    MissingArgument,

    /// The clause does not accept an argument
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    /// The argument could not be parsed
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The raw argument text.
        argument: String,

        /// Why it was rejected.
        reason: String,
    },

    /// The argument parsed but lies outside the accepted bounds
    #[error("out of range: {0}")]
    OutOfRange(String),
}

/// Errors related to registering policy providers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A provider with the same id is already registered
    #[error("Provider already registered: {0}")]
    Conflict(String),

    /// No provider with the given id is registered
    #[error("Provider not registered: {0}")]
    NotRegistered(String),
}

/// Errors related to loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// The file that was being read.
        path: PathBuf,

        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for the expected schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds inconsistent values
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Result type used throughout the Warden system.
pub type Result<T> = std::result::Result<T, Error>;
