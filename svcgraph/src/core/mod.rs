//! Core value types
//!
//! Service definitions and their names. Both are immutable once built;
//! resolution bookkeeping lives in the [`graph`](crate::graph) module and
//! never touches these values.

mod definition;
mod error;
mod service_name;

pub use definition::{ServiceDefinition, ServiceDefinitionBuilder};
pub use error::{DefinitionError, Result};
pub use service_name::ServiceName;
