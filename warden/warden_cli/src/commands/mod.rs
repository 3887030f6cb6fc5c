//! CLI commands
//!
//! This module contains the implementations of the Warden CLI commands.

pub mod policy;
