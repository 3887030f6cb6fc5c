//! # Warden Core
//!
//! `warden_core` provides the shared building blocks for the Warden
//! username-policy crates: the error hierarchy, log-level helpers and the
//! configuration file model.
//!
//! ## Crate Structure
//!
//! - **error**: Error types for all Warden components
//! - **utils**: Logging and configuration utilities
//! - **macros**: Convenience macros for structured logging

pub mod error;
pub mod macros;
pub mod utils;

// Re-export key types for convenience
pub use error::{ConfigError, Error, PolicyConfigError, PolicyError, RegistryError, Result};
pub use utils::{LogLevel, WardenConfig};

#[doc(hidden)]
pub use log;
