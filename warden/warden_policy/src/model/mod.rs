//! Policy models.
//!
//! This module defines the raw clause table and the validated policy.

pub mod clause;
pub mod policy;

pub use clause::{ClauseTable, CLAUSE_SEPARATOR};
pub use policy::UsernamePolicy;
