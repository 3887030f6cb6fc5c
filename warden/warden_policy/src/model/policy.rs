//! Validated username policy.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use warden_core::error::Result;

use crate::model::ClauseTable;
use crate::provider::{ProviderRegistry, ValidatedConfig};

/// A fully validated, immutable username policy.
///
/// Every clause has been resolved by a provider and its argument accepted.
/// The policy keeps its own snapshot of the clause table it was built from;
/// later changes to the caller's table do not affect it.
pub struct UsernamePolicy {
    /// The clause table this policy was validated from.
    source: ClauseTable,

    /// Provider-specific configuration, indexed by clause name.
    configs: HashMap<String, ValidatedConfig>,
}

impl UsernamePolicy {
    pub(crate) fn new(source: ClauseTable, configs: HashMap<String, ValidatedConfig>) -> Self {
        Self { source, configs }
    }

    /// A policy with no clauses.
    pub fn empty() -> Self {
        Self::new(ClauseTable::new(), HashMap::new())
    }

    /// An empty clause table to assemble a policy with.
    pub fn builder() -> ClauseTable {
        ClauseTable::new()
    }

    /// Parse and validate policy text in one step.
    pub fn parse<R>(registry: &R, raw: Option<&str>) -> Result<Self>
    where
        R: ProviderRegistry + ?Sized,
    {
        ClauseTable::parse(raw).build(registry)
    }

    /// Names of the validated clauses, in no particular order.
    pub fn policy_names(&self) -> HashSet<&str> {
        self.configs.keys().map(String::as_str).collect()
    }

    /// Check whether the policy has a clause with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// Number of validated clauses.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Check whether the policy has no clauses.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Get the validated configuration of a clause as its concrete type.
    ///
    /// The caller must know which provider produced the clause and which
    /// type that provider returns.
    ///
    /// # Returns
    ///
    /// The configuration, or `None` if the clause is absent or holds a
    /// different type.
    pub fn config<T: Any>(&self, name: &str) -> Option<&T> {
        self.raw_config(name)?.downcast_ref::<T>()
    }

    /// Get the validated configuration of a clause without downcasting.
    pub fn raw_config(&self, name: &str) -> Option<&(dyn Any + Send + Sync)> {
        self.configs.get(name).map(|config| &**config)
    }

    /// Render the canonical textual form of the source table.
    ///
    /// # Returns
    ///
    /// The policy text, or `None` for a policy without clauses.
    pub fn to_policy_string(&self) -> Option<String> {
        self.source.to_policy_string()
    }

    /// A copy of the source clause table that may be modified freely.
    pub fn to_builder(&self) -> ClauseTable {
        self.source.clone()
    }
}

impl fmt::Display for UsernamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl fmt::Debug for UsernamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsernamePolicy")
            .field("source", &self.source.to_policy_string())
            .field("policies", &self.source.names().collect::<Vec<_>>())
            .finish()
    }
}
