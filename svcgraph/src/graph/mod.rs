//! Dependency graph resolution for service definitions
//!
//! This module provides:
//!
//! - [`Registry`]: the set of definitions taking part in a run, keyed by name
//! - [`Resolver`]: depth-first topological ordering with missing-dependency
//!   and cycle detection
//! - Diagnostics: Graphviz rendering and a structural [`GraphSummary`]
//!
//! The registry hides how definitions are indexed; the resolver hides how
//! traversal state is kept. Callers see only definitions going in and
//! definitions coming out in dependency order.

mod config;
mod error;
mod inspect;
mod registry;
mod resolver;

pub use config::{ResolverConfig, VisitOrder};
pub use error::{CyclePath, RegistryError, RegistryResult, ResolveError, ResolveResult};
pub use inspect::GraphSummary;
pub use registry::Registry;
pub use resolver::{resolve, ResolveCallback, Resolver};
