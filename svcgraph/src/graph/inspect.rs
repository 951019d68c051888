//! Diagnostics over a registry: Graphviz rendering and structure summary

use super::error::ResolveResult;
use super::{Registry, Resolver};
use crate::ServiceName;
use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;
use serde::Serialize;

/// Statistics about a registry's dependency structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Number of services
    pub total: usize,
    /// Number of declared dependency edges
    pub edges: usize,
    /// Longest dependency chain, counted in edges
    pub max_depth: usize,
    /// Services with no dependencies
    pub roots: Vec<ServiceName>,
    /// Services nothing depends on
    pub leaves: Vec<ServiceName>,
}

impl Registry {
    /// Renders the registry in Graphviz DOT format
    ///
    /// Edges point from a dependency to its dependent, so arrows follow
    /// start-up order. Dependencies that are not registered are skipped.
    ///
    /// ```text
    /// dot -Tpng services.dot -o services.png
    /// ```
    pub fn to_dot(&self) -> String {
        let mut graph = DiGraph::<&str, ()>::with_capacity(self.len(), self.edge_count());
        let nodes: Vec<_> = self
            .iter()
            .map(|definition| graph.add_node(definition.name().as_str()))
            .collect();

        for (target, definition) in self.iter().enumerate() {
            for dependency in definition.dependencies() {
                if let Some(source) = self.position(dependency.as_str()) {
                    graph.add_edge(nodes[source], nodes[target], ());
                }
            }
        }

        format!("{:?}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }

    /// Summarizes the dependency structure
    ///
    /// Depth is computed over a resolution order, so this fails exactly
    /// when resolving would.
    pub fn summary(&self) -> ResolveResult<GraphSummary> {
        let order = Resolver::new().order(self)?;

        let mut depths = vec![0usize; self.len()];
        for definition in &order {
            let depth = definition
                .dependencies()
                .iter()
                .filter_map(|d| self.position(d.as_str()))
                .map(|i| depths[i] + 1)
                .max()
                .unwrap_or(0);
            if let Some(i) = self.position(definition.name().as_str()) {
                depths[i] = depth;
            }
        }

        Ok(GraphSummary {
            total: self.len(),
            edges: self.edge_count(),
            max_depth: depths.into_iter().max().unwrap_or(0),
            roots: self.roots().iter().map(|d| d.name().clone()).collect(),
            leaves: self.leaves().iter().map(|d| d.name().clone()).collect(),
        })
    }
}
