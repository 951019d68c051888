//! Resolve a small service registry and show both failure kinds
//!
//! Run with:
//! ```text
//! RUST_LOG=svcgraph=trace cargo run --example resolve_services
//! ```

use svcgraph::prelude::*;
use svcgraph::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn def(name: &str, deps: &[&str]) -> Result<ServiceDefinition> {
    Ok(ServiceDefinition::build()
        .name(name)
        .dependencies(deps.iter().copied())
        .create()?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("svcgraph=debug")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let registry = Registry::from_definitions([
        def("7", &["11", "8"])?,
        def("5", &["11"])?,
        def("3", &["11", "9"])?,
        def("11", &["2", "9", "10"])?,
        def("8", &["9"])?,
        def("2", &[])?,
        def("9", &[])?,
        def("10", &[])?,
    ])?;

    let resolver = Resolver::with_config(ResolverConfig::new().with_trace_emissions(true));
    let mut step = 0;
    resolver.resolve(&registry, &mut |service: &ServiceDefinition| {
        step += 1;
        println!("{step:>2}. start {}", service.name());
    })?;

    let summary = registry.summary()?;
    info!(
        total = summary.total,
        edges = summary.edges,
        max_depth = summary.max_depth,
        "registry summary"
    );
    println!("\n{}", registry.to_dot());

    let dangling = Registry::from_definitions([def("2", &["1"])?])?;
    if let Err(e) = resolver.resolve(&dangling, &mut |_: &ServiceDefinition| {}) {
        error!("{e}");
    }

    let looped = Registry::from_definitions([
        def("7", &["5"])?,
        def("5", &["11"])?,
        def("11", &["7"])?,
    ])?;
    if let Err(e) = resolver.resolve(&looped, &mut |_: &ServiceDefinition| {}) {
        error!("{e}");
    }

    Ok(())
}
