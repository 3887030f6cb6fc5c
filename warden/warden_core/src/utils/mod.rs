//! Utility functions and types.
//!
//! This module provides the logging and configuration utilities used
//! throughout the system.

pub mod config;
pub mod logging;

pub use config::{LengthSettings, RegexPatternSettings, WardenConfig};
pub use logging::LogLevel;
