//! Name-to-algorithm registry
//!
//! Algorithms are registered during an explicit initialization phase through
//! [`RegistryBuilder`]. The finished [`AlgorithmRegistry`] is only read from,
//! so a single instance can be shared across threads.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::algorithms;
use crate::{PasswordHasher, Result, SaltPassError};

/// Registry of password hashers keyed by algorithm name
#[derive(Clone, Default)]
pub struct AlgorithmRegistry {
    algorithms: HashMap<String, Arc<dyn PasswordHasher>>,
}

impl AlgorithmRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start composing a registry
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry holding every built-in family enabled in this build
    #[must_use]
    pub fn with_builtin() -> Self {
        algorithms::register_builtin(Self::builder()).build()
    }

    /// Insert or replace the algorithm registered under `name`.
    ///
    /// Returns the same algorithm so initialization code can keep a handle.
    pub fn register<A>(&mut self, name: impl Into<String>, algorithm: A) -> Arc<A>
    where
        A: PasswordHasher + 'static,
    {
        let name = name.into();
        let algorithm = Arc::new(algorithm);
        let shared: Arc<dyn PasswordHasher> = algorithm.clone();

        if self.algorithms.insert(name.clone(), shared).is_some() {
            warn!(algorithm = %name, "replaced existing hash algorithm");
        } else {
            debug!(algorithm = %name, "registered hash algorithm");
        }
        algorithm
    }

    /// Look up the algorithm registered under `name`
    ///
    /// # Errors
    ///
    /// Returns `SaltPassError::UnknownAlgorithm` when nothing is registered
    /// under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn PasswordHasher>> {
        self.algorithms
            .get(name)
            .cloned()
            .ok_or_else(|| SaltPassError::UnknownAlgorithm(name.to_string()))
    }

    /// Whether `name` is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    /// Registered names in sorted order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.algorithms.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered algorithms
    #[must_use]
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("algorithms", &self.names())
            .finish()
    }
}

/// Builder assembling an [`AlgorithmRegistry`]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    registry: AlgorithmRegistry,
}

impl RegistryBuilder {
    /// Empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `algorithm` under `name`; later registrations win
    #[must_use]
    pub fn register<A>(mut self, name: impl Into<String>, algorithm: A) -> Self
    where
        A: PasswordHasher + 'static,
    {
        self.registry.register(name, algorithm);
        self
    }

    /// Register every built-in family enabled in this build
    #[must_use]
    pub fn with_builtin(self) -> Self {
        algorithms::register_builtin(self)
    }

    /// Register only the listed built-in families
    ///
    /// # Errors
    ///
    /// Returns `SaltPassError::UnknownAlgorithm` for a name that is not a
    /// compiled-in built-in.
    pub fn with_selected<S: AsRef<str>>(self, names: &[S]) -> Result<Self> {
        algorithms::register_selected(self, names)
    }

    /// Finish the registry
    #[must_use]
    pub fn build(self) -> AlgorithmRegistry {
        self.registry
    }
}
