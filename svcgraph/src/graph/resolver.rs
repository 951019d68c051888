//! Resolver - dependency-ordered emission of service definitions
//!
//! The resolver walks a [`Registry`] depth first and emits every service
//! after all of its dependencies. It fails on the first dependency that is
//! not registered and on the first cycle it meets.
//!
//! # Algorithm
//!
//! Three-color marking, as in classic DFS cycle detection:
//! - `Unvisited`: not reached yet
//! - `InProgress`: on the traversal stack
//! - `Done`: emitted
//!
//! Reaching an `InProgress` service means the current path loops back on
//! itself. A service is emitted when it turns `Done`, which happens only
//! after every dependency has turned `Done`.
//!
//! The walk keeps an explicit stack of frames rather than recursing, so
//! a chain of any length resolves without growing the call stack. Marks
//! are kept in a table indexed by registry position and dropped when the
//! call returns; the resolver itself holds nothing but configuration.

use super::config::{ResolverConfig, VisitOrder};
use super::error::{CyclePath, ResolveError, ResolveResult};
use super::Registry;
use crate::ServiceDefinition;
use tracing::{debug, debug_span, trace, warn};

/// Sink for resolved service definitions
///
/// Called once per service, in dependency order. Any
/// `FnMut(&ServiceDefinition)` closure is a sink.
pub trait ResolveCallback {
    /// Receives the next resolved definition
    fn resolved(&mut self, definition: &ServiceDefinition);
}

impl<F> ResolveCallback for F
where
    F: FnMut(&ServiceDefinition),
{
    fn resolved(&mut self, definition: &ServiceDefinition) {
        self(definition)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// One service on the traversal stack
struct Frame {
    /// Registry position of the service
    index: usize,
    /// Next dependency to visit
    next: usize,
}

/// Topological resolver for service registries
///
/// Stateless apart from its configuration, so one resolver can serve any
/// number of calls, from any number of threads.
///
/// # Example
///
/// ```
/// use svcgraph::{Registry, Resolver, ServiceDefinition};
///
/// let registry = Registry::from_definitions([
///     ServiceDefinition::build().name("web").dependencies(["db", "cache"]).create().unwrap(),
///     ServiceDefinition::build().name("cache").dependency("db").create().unwrap(),
///     ServiceDefinition::build().name("db").create().unwrap(),
/// ])
/// .unwrap();
///
/// let mut started = Vec::new();
/// Resolver::new()
///     .resolve(&registry, &mut |d: &ServiceDefinition| started.push(d.name().to_string()))
///     .unwrap();
///
/// assert_eq!(started, vec!["db", "cache", "web"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Creates a resolver with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver with the given configuration
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves `registry`, handing each definition to `on_resolved`
    ///
    /// On success `on_resolved` has been called exactly once per
    /// registered service, each after all of its dependencies. On failure
    /// services emitted before the error was detected stay emitted;
    /// nothing further is emitted.
    pub fn resolve<C>(&self, registry: &Registry, on_resolved: &mut C) -> ResolveResult<()>
    where
        C: ResolveCallback + ?Sized,
    {
        self.walk(registry, &mut |definition| on_resolved.resolved(definition))
            .map(|_| ())
    }

    /// Resolves `registry` and returns the definitions in resolution order
    pub fn order<'r>(&self, registry: &'r Registry) -> ResolveResult<Vec<&'r ServiceDefinition>> {
        let mut order = Vec::with_capacity(registry.len());
        self.walk(registry, &mut |definition| order.push(definition))?;
        Ok(order)
    }

    fn walk<'r>(
        &self,
        registry: &'r Registry,
        emit: &mut dyn FnMut(&'r ServiceDefinition),
    ) -> ResolveResult<usize> {
        let span = debug_span!("resolve", services = registry.len());
        let _guard = span.enter();
        debug!(visit_order = ?self.config.visit_order, "starting resolution");

        let definitions = registry.definitions();
        let mut marks = vec![Mark::Unvisited; definitions.len()];
        let mut stack: Vec<Frame> = Vec::new();
        let mut emitted = 0;

        for root in self.roots(registry) {
            if marks[root] == Mark::Done {
                continue;
            }

            marks[root] = Mark::InProgress;
            stack.push(Frame {
                index: root,
                next: 0,
            });

            while let Some(frame) = stack.last_mut() {
                let index = frame.index;
                let definition = &definitions[index];

                let Some(dependency) = definition.dependencies().get(frame.next) else {
                    stack.pop();
                    marks[index] = Mark::Done;
                    if self.config.trace_emissions {
                        trace!(service = %definition.name(), "resolved");
                    }
                    emit(definition);
                    emitted += 1;
                    continue;
                };
                frame.next += 1;

                let Some(dep_index) = registry.position(dependency.as_str()) else {
                    warn!(
                        service = %definition.name(),
                        dependency = %dependency,
                        "missing dependency"
                    );
                    return Err(ResolveError::missing_dependency(
                        definition.name().clone(),
                        dependency.clone(),
                    ));
                };

                match marks[dep_index] {
                    Mark::Done => {}
                    Mark::InProgress => {
                        let path = cycle_path(registry, &stack, dep_index);
                        warn!(
                            service = %definition.name(),
                            dependency = %dependency,
                            cycle = %path,
                            "circular dependency"
                        );
                        return Err(ResolveError::circular_dependency(
                            definition.name().clone(),
                            dependency.clone(),
                            path,
                        ));
                    }
                    Mark::Unvisited => {
                        marks[dep_index] = Mark::InProgress;
                        stack.push(Frame {
                            index: dep_index,
                            next: 0,
                        });
                    }
                }
            }
        }

        debug!(emitted, "resolution complete");
        Ok(emitted)
    }

    /// Registry positions in the order they are tried as roots
    fn roots(&self, registry: &Registry) -> Vec<usize> {
        let mut roots: Vec<usize> = (0..registry.len()).collect();
        if self.config.visit_order == VisitOrder::ByName {
            let definitions = registry.definitions();
            roots.sort_by(|&a, &b| definitions[a].name().cmp(definitions[b].name()));
        }
        roots
    }
}

/// Resolves `registry` with the default configuration
pub fn resolve<C>(registry: &Registry, on_resolved: &mut C) -> ResolveResult<()>
where
    C: ResolveCallback + ?Sized,
{
    Resolver::new().resolve(registry, on_resolved)
}

/// The stack slice from `closing` to the top, plus `closing` again
fn cycle_path(registry: &Registry, stack: &[Frame], closing: usize) -> CyclePath {
    let definitions = registry.definitions();
    let start = stack
        .iter()
        .position(|frame| frame.index == closing)
        .unwrap_or(0);

    let mut services: Vec<_> = stack[start..]
        .iter()
        .map(|frame| definitions[frame.index].name().clone())
        .collect();
    services.push(definitions[closing].name().clone());
    CyclePath::new(services)
}
