//! Registry - the set of service definitions taking part in one resolution
//!
//! Definitions are stored in insertion order alongside a name index. The
//! resolver addresses services by their position in that order, which lets
//! traversal state live in a flat table instead of a second hash map.

use super::error::{RegistryError, RegistryResult, ResolveError, ResolveResult};
use crate::{ServiceDefinition, ServiceName};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A mapping from service name to definition
///
/// Every key is the name of the definition stored under it; the registry
/// keys entries by `definition.name()` so the two cannot disagree.
///
/// # Example
///
/// ```
/// use svcgraph::{Registry, ServiceDefinition};
///
/// let registry = Registry::from_definitions([
///     ServiceDefinition::build().name("web").dependency("db").create().unwrap(),
///     ServiceDefinition::build().name("db").create().unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.contains("db"));
/// assert!(registry.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<ServiceDefinition>",
    into = "Vec<ServiceDefinition>"
)]
pub struct Registry {
    /// Definitions in insertion order
    definitions: Vec<ServiceDefinition>,
    /// Name to position in `definitions`
    index: HashMap<ServiceName, usize>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` definitions
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            definitions: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Builds a registry from definitions, keeping their order
    ///
    /// Fails on the first name seen twice.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ServiceDefinition>,
    ) -> RegistryResult<Self> {
        let definitions = definitions.into_iter();
        let mut registry = Self::with_capacity(definitions.size_hint().0);
        for definition in definitions {
            registry.insert(definition)?;
        }
        Ok(registry)
    }

    /// Adds a definition
    ///
    /// Returns an error if a definition with the same name already exists.
    pub fn insert(&mut self, definition: ServiceDefinition) -> RegistryResult<()> {
        if self.index.contains_key(definition.name()) {
            return Err(RegistryError::duplicate_service(definition.name().clone()));
        }

        self.index
            .insert(definition.name().clone(), self.definitions.len());
        self.definitions.push(definition);
        Ok(())
    }

    /// Returns the number of definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the registry holds no definitions
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Looks up a definition by name
    pub fn get(&self, name: &str) -> Option<&ServiceDefinition> {
        self.index.get(name).map(|&i| &self.definitions[i])
    }

    /// Returns true if a definition with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns an iterator over definitions in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDefinition> {
        self.definitions.iter()
    }

    /// Returns an iterator over service names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &ServiceName> {
        self.definitions.iter().map(ServiceDefinition::name)
    }

    pub(crate) fn definitions(&self) -> &[ServiceDefinition] {
        &self.definitions
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Checks that every declared dependency is registered
    ///
    /// Reports the first missing reference in registry order. Cycles are
    /// not checked here; they surface during resolution.
    pub fn validate(&self) -> ResolveResult<()> {
        for definition in &self.definitions {
            for dependency in definition.dependencies() {
                if !self.contains(dependency.as_str()) {
                    return Err(ResolveError::missing_dependency(
                        definition.name().clone(),
                        dependency.clone(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Returns definitions with no dependencies, in insertion order
    pub fn roots(&self) -> Vec<&ServiceDefinition> {
        self.definitions.iter().filter(|d| d.is_leaf()).collect()
    }

    /// Returns definitions nothing depends on, in insertion order
    pub fn leaves(&self) -> Vec<&ServiceDefinition> {
        let depended_on: HashSet<&str> = self
            .definitions
            .iter()
            .flat_map(|d| d.dependencies().iter().map(ServiceName::as_str))
            .collect();

        self.definitions
            .iter()
            .filter(|d| !depended_on.contains(d.name().as_str()))
            .collect()
    }

    /// Returns definitions that directly depend on `name`, in insertion order
    ///
    /// This scans every definition; callers needing many lookups should
    /// build their own reverse index.
    pub fn dependents(&self, name: &str) -> Vec<&ServiceDefinition> {
        self.definitions
            .iter()
            .filter(|d| d.depends_on(name))
            .collect()
    }

    /// Returns the total number of declared dependency edges
    pub fn edge_count(&self) -> usize {
        self.definitions.iter().map(|d| d.dependencies().len()).sum()
    }
}

impl TryFrom<Vec<ServiceDefinition>> for Registry {
    type Error = RegistryError;

    fn try_from(definitions: Vec<ServiceDefinition>) -> RegistryResult<Self> {
        Self::from_definitions(definitions)
    }
}

impl From<Registry> for Vec<ServiceDefinition> {
    fn from(registry: Registry) -> Self {
        registry.definitions
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ServiceDefinition;
    type IntoIter = std::slice::Iter<'a, ServiceDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
