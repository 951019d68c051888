//! Resolver configuration

use serde::{Deserialize, Serialize};

/// Order in which top-level services are picked as traversal roots
///
/// Dependencies of a service are always visited in declaration order;
/// this only controls which unresolved service the walker starts from next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitOrder {
    /// Registry insertion order
    #[default]
    Insertion,
    /// Lexicographic order of service names, independent of insertion
    ByName,
}

/// Settings for a [`Resolver`](super::Resolver)
///
/// # Example
///
/// ```
/// use svcgraph::{ResolverConfig, VisitOrder};
///
/// let config = ResolverConfig::new()
///     .with_visit_order(VisitOrder::ByName)
///     .with_trace_emissions(true);
///
/// assert_eq!(config.visit_order, VisitOrder::ByName);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Root selection order
    pub visit_order: VisitOrder,
    /// Emit a `trace` event for every resolved service
    pub trace_emissions: bool,
}

impl ResolverConfig {
    /// Creates the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root selection order
    pub fn with_visit_order(mut self, visit_order: VisitOrder) -> Self {
        self.visit_order = visit_order;
        self
    }

    /// Enables or disables per-service trace events
    pub fn with_trace_emissions(mut self, enabled: bool) -> Self {
        self.trace_emissions = enabled;
        self
    }
}
