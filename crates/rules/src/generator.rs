//! Generators and the name-based resolver `generate-with` rules use.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::context::RebindContext;

/// Error reported by a generator; wrapped into
/// [`RebindError::GeneratorFailed`](crate::RebindError::GeneratorFailed) by the rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct GeneratorError(pub String);

impl GeneratorError {
    /// Create an error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Synthesizes a replacement type name for a rebound type.
pub trait Generator: Send + Sync {
    /// Produce the name of the type that should replace `type_name`.
    fn generate(&self, ctx: &RebindContext<'_>, type_name: &str) -> Result<String, GeneratorError>;

    /// Release anything held between invocations. Called when the owning
    /// rule is disposed.
    fn release(&self) {}
}

/// Finds generators by name at evaluation time.
///
/// Resolution happens on every `realize`, so a resolver recreated per
/// session is always the one consulted.
pub trait GeneratorResolver {
    /// A generator instance for `name`, or `None` if it is unknown.
    fn resolve(&self, name: &str) -> Option<Arc<dyn Generator>>;
}

type GeneratorFactory = Arc<dyn Fn() -> Arc<dyn Generator> + Send + Sync>;

/// Errors from registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A generator is already registered under this name.
    #[error("generator '{0}' already exists")]
    AlreadyExists(String),

    /// No generator is registered under this name.
    #[error("generator not found: {0}")]
    NotFound(String),
}

/// Name → factory map. Each resolve builds a fresh generator instance.
///
/// ```
/// use std::sync::Arc;
/// use rebind_rules::{Generator, GeneratorError, GeneratorRegistry, GeneratorResolver, RebindContext};
///
/// struct Suffix;
/// impl Generator for Suffix {
///     fn generate(&self, _ctx: &RebindContext<'_>, type_name: &str) -> Result<String, GeneratorError> {
///         Ok(format!("{type_name}_Generated"))
///     }
/// }
///
/// let mut registry = GeneratorRegistry::new();
/// registry.register("com.foo.SuffixGenerator", || Arc::new(Suffix)).unwrap();
/// assert!(registry.resolve("com.foo.SuffixGenerator").is_some());
/// assert!(registry.resolve("com.foo.Missing").is_none());
/// ```
#[derive(Default)]
pub struct GeneratorRegistry {
    factories: HashMap<String, GeneratorFactory>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory. Fails if the name already exists.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn() -> Arc<dyn Generator> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(RegistryError::AlreadyExists(name));
        }
        self.factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Register or replace a factory under the given name.
    pub fn register_or_replace<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn Generator> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Whether a generator with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Remove a generator by name.
    pub fn remove(&mut self, name: &str) -> Result<(), RegistryError> {
        self.factories
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl GeneratorResolver for GeneratorRegistry {
    fn resolve(&self, name: &str) -> Option<Arc<dyn Generator>> {
        self.factories.get(name).map(|factory| factory())
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("count", &self.factories.len())
            .field("names", &self.names())
            .finish()
    }
}
