//! # Warden Policy
//!
//! `warden_policy` parses, validates and serializes username policies such
//! as `length(3,255) and regexPattern(^[a-z]+$)`.
//!
//! Key concepts:
//!
//! 1. **Clause Table**: The raw, ordered, mutable form of a policy. Parsing
//!    is permissive and never fails.
//!
//! 2. **Provider**: Interprets the argument of one kind of clause. Providers
//!    are looked up by clause name through a registry.
//!
//! 3. **Username Policy**: The immutable result of validating every clause
//!    of a table. Validation either succeeds for all clauses or fails as a
//!    whole.
//!
//! ```
//! use warden_core::utils::WardenConfig;
//! use warden_policy::{InMemoryProviderRegistry, LengthConfig, PolicyEngine};
//!
//! let registry = InMemoryProviderRegistry::with_builtin_providers(&WardenConfig::default());
//! let engine = PolicyEngine::new(registry);
//!
//! let policy = engine
//!     .parse_and_validate(Some("length(3,32) and regexPattern(^[a-z]+$)"))
//!     .unwrap();
//! assert_eq!(
//!     policy.config::<LengthConfig>("length"),
//!     Some(&LengthConfig { min: 3, max: 32 })
//! );
//! assert_eq!(
//!     policy.to_policy_string().as_deref(),
//!     Some("length(3,32) and regexPattern(^[a-z]+$)")
//! );
//! ```

pub mod engine;
pub mod model;
pub mod provider;

// Re-export key types and traits for convenience
pub use engine::{validate, PolicyEngine};
pub use model::{ClauseTable, UsernamePolicy};
pub use provider::{
    InMemoryProviderRegistry, LengthConfig, NotEmailConfig, PolicyProvider, ProviderRegistry,
    RegexPatternConfig, ValidatedConfig, LENGTH_ID, NOT_EMAIL_ID, REGEX_PATTERN_ID,
};
