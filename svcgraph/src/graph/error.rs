//! Error types for registry and resolution operations

use crate::ServiceName;
use std::fmt;
use thiserror::Error;

/// Result type for resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Result type for registry construction
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that abort a resolution run
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveError {
    /// A service declares a dependency that is not in the registry
    #[error("service '{service}' depends on '{dependency}', which is not registered")]
    MissingDependency {
        /// The service that declared the dependency
        service: ServiceName,
        /// The name that could not be found
        dependency: ServiceName,
    },

    /// Traversal reached a service that is still being resolved
    #[error("circular dependency detected: {path}")]
    CircularDependency {
        /// The service whose dependency closes the cycle
        service: ServiceName,
        /// The in-progress service it points back to
        dependency: ServiceName,
        /// Every service on the cycle, starting and ending at `dependency`
        path: CyclePath,
    },
}

impl ResolveError {
    /// Creates a missing dependency error
    pub fn missing_dependency(service: ServiceName, dependency: ServiceName) -> Self {
        Self::MissingDependency {
            service,
            dependency,
        }
    }

    /// Creates a circular dependency error
    pub fn circular_dependency(
        service: ServiceName,
        dependency: ServiceName,
        path: CyclePath,
    ) -> Self {
        Self::CircularDependency {
            service,
            dependency,
            path,
        }
    }

    /// Returns the service whose dependency triggered the error
    pub fn service(&self) -> &ServiceName {
        match self {
            Self::MissingDependency { service, .. } | Self::CircularDependency { service, .. } => {
                service
            }
        }
    }

    /// Returns the dependency name that triggered the error
    pub fn dependency(&self) -> &ServiceName {
        match self {
            Self::MissingDependency { dependency, .. }
            | Self::CircularDependency { dependency, .. } => dependency,
        }
    }

    /// Returns the cycle path for circular dependency errors
    pub fn cycle(&self) -> Option<&CyclePath> {
        match self {
            Self::CircularDependency { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Errors raised while assembling a registry
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// Two definitions share a name
    #[error("duplicate service name: {name}")]
    DuplicateService {
        /// The name registered twice
        name: ServiceName,
    },
}

impl RegistryError {
    /// Creates a duplicate service error
    pub fn duplicate_service(name: ServiceName) -> Self {
        Self::DuplicateService { name }
    }
}

/// The services forming a dependency cycle
///
/// The first and last entries are the same service, so a self-dependency
/// on `a` reads `a -> a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePath(Vec<ServiceName>);

impl CyclePath {
    pub(crate) fn new(services: Vec<ServiceName>) -> Self {
        Self(services)
    }

    /// Returns the services along the cycle, closing entry included
    pub fn services(&self) -> &[ServiceName] {
        &self.0
    }

    /// Returns the number of dependency edges on the cycle
    pub fn len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Returns true if the path holds no edges
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `name` lies on the cycle
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|s| s == name)
    }
}

impl fmt::Display for CyclePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, service) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", service)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_path_display() {
        let path = CyclePath::new(vec!["7".into(), "5".into(), "11".into(), "7".into()]);
        assert_eq!(path.to_string(), "7 -> 5 -> 11 -> 7");
        assert_eq!(path.len(), 3);
        assert!(path.contains("11"));
        assert!(!path.contains("3"));
    }

    #[test]
    fn test_self_cycle_has_one_edge() {
        let path = CyclePath::new(vec!["a".into(), "a".into()]);
        assert_eq!(path.len(), 1);
        assert!(!path.is_empty());
        assert_eq!(path.to_string(), "a -> a");
    }

    #[test]
    fn test_error_messages() {
        let err = ResolveError::missing_dependency("2".into(), "1".into());
        assert_eq!(
            err.to_string(),
            "service '2' depends on '1', which is not registered"
        );
        assert_eq!(err.service(), "2");
        assert_eq!(err.dependency(), "1");
        assert!(err.cycle().is_none());

        let err = ResolveError::circular_dependency(
            "b".into(),
            "a".into(),
            CyclePath::new(vec!["a".into(), "b".into(), "a".into()]),
        );
        assert_eq!(err.to_string(), "circular dependency detected: a -> b -> a");
        assert_eq!(err.cycle().map(CyclePath::len), Some(2));

        let err = RegistryError::duplicate_service("db".into());
        assert_eq!(err.to_string(), "duplicate service name: db");
    }
}
