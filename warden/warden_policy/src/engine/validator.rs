//! Policy validation engine.
//!
//! This module turns raw clause tables into validated policies by resolving
//! every clause against a provider registry.

use std::any::Any;
use std::collections::HashMap;
use std::collections::HashSet;
use warden_core::error::{PolicyError, Result};
use warden_core::log_event;
use warden_core::utils::LogLevel;

use crate::model::{ClauseTable, UsernamePolicy};
use crate::provider::ProviderRegistry;

/// Validate a clause table against a provider registry.
///
/// Clauses are resolved in table order. The first clause without a provider
/// fails with [`PolicyError::NotFound`]; the first argument a provider rejects
/// fails with [`PolicyError::InvalidConfig`]. Either failure aborts the whole
/// validation and no policy is produced.
///
/// # Arguments
///
/// * `registry` - The registry to resolve clause names with.
/// * `table` - The clause table to validate. The policy keeps its own copy.
///
/// # Returns
///
/// * `Ok(UsernamePolicy)` - The validated policy.
/// * `Err` - If any clause could not be resolved or validated.
pub fn validate<R>(registry: &R, table: &ClauseTable) -> Result<UsernamePolicy>
where
    R: ProviderRegistry + ?Sized,
{
    let mut configs = HashMap::with_capacity(table.len());

    for (name, argument) in table.iter() {
        let provider = match registry.resolve(name) {
            Some(provider) => provider,
            None => {
                log_event!(LogLevel::Warning, "Username policy not found", policy => name);
                return Err(PolicyError::NotFound(name.to_string()).into());
            }
        };

        log::trace!("Resolved username policy {} to provider {}", name, provider.id());

        let config = provider.parse_config(argument).map_err(|e| {
            log_event!(LogLevel::Warning, "Invalid username policy config",
                policy => name,
                reason => e,
            );
            PolicyError::InvalidConfig {
                policy: name.to_string(),
                reason: e.to_string(),
            }
        })?;

        configs.insert(name.to_string(), config);
    }

    log::debug!("Validated username policy with {} clause(s)", configs.len());
    Ok(UsernamePolicy::new(table.clone(), configs))
}

/// Policy engine.
///
/// Binds a provider registry to the parse, validate and serialize
/// operations on username policies.
pub struct PolicyEngine<R> {
    /// The provider registry.
    registry: R,
}

impl<R> PolicyEngine<R>
where
    R: ProviderRegistry,
{
    /// Create a new policy engine.
    ///
    /// # Arguments
    ///
    /// * `registry` - The provider registry.
    ///
    /// # Returns
    ///
    /// A new policy engine.
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// The provider registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Parse policy text and validate the result.
    ///
    /// # Arguments
    ///
    /// * `raw` - The policy text, if any. Absent or blank text yields an
    ///   empty policy.
    pub fn parse_and_validate(&self, raw: Option<&str>) -> Result<UsernamePolicy> {
        self.validate(&ClauseTable::parse(raw))
    }

    /// Validate a clause table. See [`validate`].
    pub fn validate(&self, table: &ClauseTable) -> Result<UsernamePolicy> {
        validate(&self.registry, table)
    }

    /// Names of the clauses in a validated policy.
    pub fn policy_names<'p>(&self, policy: &'p UsernamePolicy) -> HashSet<&'p str> {
        policy.policy_names()
    }

    /// The validated configuration of one clause, as its concrete type.
    pub fn validated_config<'p, T: Any>(
        &self,
        policy: &'p UsernamePolicy,
        name: &str,
    ) -> Option<&'p T> {
        policy.config::<T>(name)
    }

    /// Canonical text of a policy, or `None` if it has no clauses.
    pub fn serialize(&self, policy: &UsernamePolicy) -> Option<String> {
        policy.to_policy_string()
    }

    /// A modifiable copy of the clause table behind a policy.
    pub fn to_builder(&self, policy: &UsernamePolicy) -> ClauseTable {
        policy.to_builder()
    }
}
