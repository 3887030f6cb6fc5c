//! Policy engine.
//!
//! This module validates clause tables against provider registries.

mod validator;

pub use validator::{validate, PolicyEngine};
