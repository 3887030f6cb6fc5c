//! In-memory provider registry.

use dashmap::DashMap;
use std::sync::Arc;
use warden_core::error::{RegistryError, Result};
use warden_core::utils::WardenConfig;

use super::{
    LengthProvider, NotEmailProvider, PolicyProvider, ProviderRegistry, RegexPatternProvider,
};

/// An in-memory provider registry.
///
/// Clones share the same underlying providers.
#[derive(Clone)]
pub struct InMemoryProviderRegistry {
    /// The providers, indexed by id.
    providers: Arc<DashMap<String, Arc<dyn PolicyProvider>>>,
}

impl InMemoryProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Arc::new(DashMap::new()),
        }
    }

    /// Create a registry holding the built-in providers.
    ///
    /// # Arguments
    ///
    /// * `config` - Bounds for the built-in providers.
    pub fn with_builtin_providers(config: &WardenConfig) -> Self {
        let registry = Self::new();

        let builtins: [Arc<dyn PolicyProvider>; 3] = [
            Arc::new(LengthProvider::new(config.length.clone())),
            Arc::new(RegexPatternProvider::new(config.regex_pattern.clone())),
            Arc::new(NotEmailProvider),
        ];
        for provider in builtins {
            registry
                .providers
                .insert(provider.id().to_string(), provider);
        }

        registry
    }

    /// Register a provider under its id.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the provider was registered.
    /// * `Err` - If a provider with the same id is already registered.
    pub fn register(&self, provider: impl PolicyProvider + 'static) -> Result<()> {
        let id = provider.id().to_string();

        match self.providers.entry(id) {
            dashmap::mapref::entry::Entry::Occupied(entry) => {
                Err(RegistryError::Conflict(entry.key().clone()).into())
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                log::debug!("Registered username policy provider {}", entry.key());
                entry.insert(Arc::new(provider));
                Ok(())
            }
        }
    }

    /// Remove a provider.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the provider was removed.
    /// * `Err` - If no provider with this id is registered.
    pub fn unregister(&self, id: &str) -> Result<()> {
        if self.providers.remove(id).is_none() {
            return Err(RegistryError::NotRegistered(id.to_string()).into());
        }

        Ok(())
    }
}

impl Default for InMemoryProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderRegistry for InMemoryProviderRegistry {
    fn resolve(&self, name: &str) -> Option<Arc<dyn PolicyProvider>> {
        self.providers.get(name).map(|entry| Arc::clone(entry.value()))
    }

    fn provider_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.providers.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }
}
