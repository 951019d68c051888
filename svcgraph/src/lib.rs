//! svcgraph: dependency ordering for service definitions
//!
//! Given a set of named service definitions, each declaring the names it
//! depends on, `svcgraph` produces an order in which every service comes
//! after all of its dependencies. Resolution fails on a dependency that is
//! not registered and on any dependency cycle, self-dependencies included.
//!
//! # Quick Start
//!
//! ```
//! use svcgraph::prelude::*;
//!
//! # fn main() -> svcgraph::Result<()> {
//! let registry = Registry::from_definitions([
//!     ServiceDefinition::build().name("web").dependencies(["api", "assets"]).create()?,
//!     ServiceDefinition::build().name("api").dependency("db").create()?,
//!     ServiceDefinition::build().name("assets").create()?,
//!     ServiceDefinition::build().name("db").create()?,
//! ])?;
//!
//! let mut started = Vec::new();
//! resolve(&registry, &mut |service: &ServiceDefinition| {
//!     started.push(service.name().to_string());
//! })?;
//!
//! assert_eq!(started, vec!["db", "api", "assets", "web"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Ordering
//!
//! Services are tried as traversal roots in registry insertion order and
//! dependencies are visited in declaration order, so the same registry
//! always resolves to the same sequence. [`VisitOrder::ByName`] makes the
//! result independent of insertion order.
//!
//! # Module Organization
//!
//! - [`core`](crate::core): immutable definitions and names
//! - [`graph`]: registry, resolver and diagnostics

pub mod core;
mod error;
pub mod graph;

pub use crate::core::{DefinitionError, ServiceDefinition, ServiceDefinitionBuilder, ServiceName};

pub use error::{Error, Result};

pub use graph::{
    resolve, CyclePath, GraphSummary, Registry, RegistryError, RegistryResult, ResolveCallback,
    ResolveError, ResolveResult, Resolver, ResolverConfig, VisitOrder,
};

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use svcgraph::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{ServiceDefinition, ServiceName};
    pub use crate::graph::{
        resolve, Registry, ResolveCallback, ResolveError, Resolver, ResolverConfig, VisitOrder,
    };
}
