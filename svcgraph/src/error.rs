use crate::core::DefinitionError;
use crate::graph::{RegistryError, ResolveError};
use thiserror::Error;

/// Any error this crate produces.
///
/// Convenient for callers that build definitions, assemble a registry and
/// resolve it in one function with `?`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Registry, Resolver, ServiceDefinition};

    fn build_and_resolve(specs: &[(&str, Vec<&str>)]) -> Result<Vec<String>> {
        let mut registry = Registry::new();
        for (name, deps) in specs {
            registry.insert(
                ServiceDefinition::build()
                    .name(*name)
                    .dependencies(deps.iter().copied())
                    .create()?,
            )?;
        }
        let order = Resolver::new().order(&registry)?;
        Ok(order.iter().map(|d| d.name().to_string()).collect())
    }

    #[test]
    fn test_question_mark_across_layers() {
        assert_eq!(
            build_and_resolve(&[("b", vec!["a"]), ("a", vec![])]).unwrap(),
            vec!["a", "b"]
        );

        assert!(matches!(
            build_and_resolve(&[("", vec![])]),
            Err(Error::Definition(DefinitionError::MissingName))
        ));
        assert!(matches!(
            build_and_resolve(&[("a", vec![]), ("a", vec![])]),
            Err(Error::Registry(RegistryError::DuplicateService { .. }))
        ));
        assert!(matches!(
            build_and_resolve(&[("a", vec!["b"])]),
            Err(Error::Resolve(ResolveError::MissingDependency { .. }))
        ));
    }

    #[test]
    fn test_transparent_display() {
        let err: Error = ResolveError::missing_dependency("2".into(), "1".into()).into();
        assert_eq!(
            err.to_string(),
            "service '2' depends on '1', which is not registered"
        );
    }
}
