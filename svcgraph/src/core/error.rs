use thiserror::Error;

/// Errors raised while building a service definition.
///
/// These are construction-time failures; a definition that exists has
/// already passed these checks, so the resolver never sees them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DefinitionError {
    /// The builder was finalized without a name, or with an empty one.
    #[error("service definition has no name")]
    MissingName,
}

pub type Result<T> = std::result::Result<T, DefinitionError>;
