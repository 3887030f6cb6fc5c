//! Policy providers.
//!
//! A provider interprets the argument of one kind of clause. Providers are
//! looked up by clause name through a [`ProviderRegistry`].

mod in_memory;
mod length;
mod not_email;
mod regex_pattern;

pub use in_memory::InMemoryProviderRegistry;
pub use length::{LengthConfig, LengthProvider, LENGTH_ID};
pub use not_email::{NotEmailConfig, NotEmailProvider, NOT_EMAIL_ID};
pub use regex_pattern::{RegexPatternConfig, RegexPatternProvider, REGEX_PATTERN_ID};

use std::any::Any;
use std::sync::Arc;
use warden_core::error::PolicyConfigError;

/// Provider-specific configuration produced by validating a clause.
///
/// The concrete type is chosen by the provider; callers downcast it by
/// convention, knowing which provider handles which clause name.
pub type ValidatedConfig = Box<dyn Any + Send + Sync>;

/// Trait for policy providers.
///
/// A provider turns the raw argument of a clause into a validated
/// configuration, or rejects it.
pub trait PolicyProvider: Send + Sync {
    /// The clause name this provider handles.
    fn id(&self) -> &str;

    /// Parse and validate a clause argument.
    ///
    /// # Arguments
    ///
    /// * `argument` - The raw argument text, or `None` if the clause was
    ///   declared without parentheses.
    ///
    /// # Returns
    ///
    /// * `Ok(ValidatedConfig)` - The provider's configuration object.
    /// * `Err(PolicyConfigError)` - If the argument is not acceptable.
    fn parse_config(&self, argument: Option<&str>)
        -> Result<ValidatedConfig, PolicyConfigError>;
}

/// Trait for provider lookup.
///
/// A registry is only ever queried by the policy engine.
pub trait ProviderRegistry: Send + Sync {
    /// Resolve a clause name to its provider.
    ///
    /// # Returns
    ///
    /// The provider, or `None` if no provider handles this name.
    fn resolve(&self, name: &str) -> Option<Arc<dyn PolicyProvider>>;

    /// Ids of all registered providers, sorted.
    fn provider_ids(&self) -> Vec<String>;
}

impl<R> ProviderRegistry for Arc<R>
where
    R: ProviderRegistry + ?Sized,
{
    fn resolve(&self, name: &str) -> Option<Arc<dyn PolicyProvider>> {
        (**self).resolve(name)
    }

    fn provider_ids(&self) -> Vec<String> {
        (**self).provider_ids()
    }
}

/// Check whether an optional argument is absent or blank.
pub(crate) fn is_blank(argument: Option<&str>) -> bool {
    argument.map_or(true, |argument| argument.trim().is_empty())
}
