//! Service definitions
//!
//! A [`ServiceDefinition`] is a named unit plus the names it depends on.
//! Definitions are assembled with [`ServiceDefinitionBuilder`] and are
//! immutable afterwards.

use super::error::{DefinitionError, Result};
use super::ServiceName;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An immutable service definition
///
/// Dependencies keep their declaration order with duplicates collapsed,
/// so the resolver visits them in a stable order.
///
/// # Example
///
/// ```
/// use svcgraph::ServiceDefinition;
///
/// let web = ServiceDefinition::build()
///     .name("web")
///     .dependencies(["db", "cache", "db"])
///     .create()
///     .unwrap();
///
/// assert_eq!(web.name(), "web");
/// assert_eq!(web.dependencies().len(), 2);
/// assert!(web.depends_on("cache"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDefinition")]
pub struct ServiceDefinition {
    name: ServiceName,
    dependencies: Vec<ServiceName>,
}

impl ServiceDefinition {
    /// Starts building a new definition
    pub fn build() -> ServiceDefinitionBuilder {
        ServiceDefinitionBuilder::default()
    }

    /// Returns the service name
    pub fn name(&self) -> &ServiceName {
        &self.name
    }

    /// Returns the dependency names in declaration order
    pub fn dependencies(&self) -> &[ServiceName] {
        &self.dependencies
    }

    /// Returns true if this definition declares no dependencies
    pub fn is_leaf(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Returns true if `name` is among the declared dependencies
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }
}

/// Accumulating builder for [`ServiceDefinition`]
#[derive(Debug, Clone, Default)]
pub struct ServiceDefinitionBuilder {
    name: Option<ServiceName>,
    dependencies: Vec<ServiceName>,
}

impl ServiceDefinitionBuilder {
    /// Sets the service name, replacing any previous one
    pub fn name(mut self, name: impl Into<ServiceName>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a single dependency
    pub fn dependency(mut self, dependency: impl Into<ServiceName>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    /// Adds several dependencies, keeping their order
    pub fn dependencies<I>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ServiceName>,
    {
        self.dependencies
            .extend(dependencies.into_iter().map(Into::into));
        self
    }

    /// Finalizes the definition
    ///
    /// Fails with [`DefinitionError::MissingName`] if no non-empty name was set.
    pub fn create(self) -> Result<ServiceDefinition> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(DefinitionError::MissingName),
        };

        let mut seen = HashSet::with_capacity(self.dependencies.len());
        let mut dependencies = self.dependencies;
        dependencies.retain(|d| seen.insert(d.clone()));

        Ok(ServiceDefinition { name, dependencies })
    }
}

/// Wire form; deserialization goes through the builder.
#[derive(Deserialize)]
struct RawDefinition {
    name: ServiceName,
    #[serde(default)]
    dependencies: Vec<ServiceName>,
}

impl TryFrom<RawDefinition> for ServiceDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawDefinition) -> Result<Self> {
        ServiceDefinition::build()
            .name(raw.name)
            .dependencies(raw.dependencies)
            .create()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_dependencies() {
        let def = ServiceDefinition::build().name("db").create().unwrap();
        assert_eq!(def.name(), "db");
        assert!(def.is_leaf());
    }

    #[test]
    fn test_dependencies_keep_declaration_order() {
        let def = ServiceDefinition::build()
            .name("11")
            .dependency("2")
            .dependencies(vec!["9", "10"])
            .create()
            .unwrap();

        let deps: Vec<&str> = def.dependencies().iter().map(|d| d.as_str()).collect();
        assert_eq!(deps, vec!["2", "9", "10"]);
    }

    #[test]
    fn test_duplicate_dependencies_collapse() {
        let def = ServiceDefinition::build()
            .name("a")
            .dependencies(["b", "c", "b", "c", "d"])
            .create()
            .unwrap();

        let deps: Vec<&str> = def.dependencies().iter().map(|d| d.as_str()).collect();
        assert_eq!(deps, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_missing_name_error() {
        let result = ServiceDefinition::build().dependency("x").create();
        assert!(matches!(result, Err(DefinitionError::MissingName)));

        let result = ServiceDefinition::build().name("").create();
        assert!(matches!(result, Err(DefinitionError::MissingName)));
    }

    #[test]
    fn test_name_can_be_replaced() {
        let def = ServiceDefinition::build()
            .name("first")
            .name("second")
            .create()
            .unwrap();
        assert_eq!(def.name(), "second");
    }

    #[test]
    fn test_deserialize_goes_through_builder() {
        let def: ServiceDefinition =
            serde_json::from_str(r#"{"name":"web","dependencies":["db","db"]}"#).unwrap();
        assert_eq!(def.dependencies().len(), 1);

        let def: ServiceDefinition = serde_json::from_str(r#"{"name":"db"}"#).unwrap();
        assert!(def.is_leaf());

        let result: std::result::Result<ServiceDefinition, _> =
            serde_json::from_str(r#"{"name":""}"#);
        assert!(result.is_err());
    }
}
