//! Property tests over generated registries

use proptest::prelude::*;
use std::collections::HashMap;
use svcgraph::prelude::*;

/// Acyclic registries: service `i` may only depend on services `< i`.
/// `reversed` controls whether dependents are inserted before dependencies.
fn acyclic_registry() -> impl Strategy<Value = Registry> {
    (
        prop::collection::vec(prop::collection::vec(any::<usize>(), 0..6), 1..80),
        any::<bool>(),
    )
        .prop_map(|(raw, reversed)| {
            let mut definitions: Vec<ServiceDefinition> = raw
                .iter()
                .enumerate()
                .map(|(i, picks)| {
                    let deps: Vec<String> = if i == 0 {
                        Vec::new()
                    } else {
                        picks.iter().map(|p| format!("svc{}", p % i)).collect()
                    };
                    ServiceDefinition::build()
                        .name(format!("svc{i}"))
                        .dependencies(deps)
                        .create()
                        .unwrap()
                })
                .collect();
            if reversed {
                definitions.reverse();
            }
            Registry::from_definitions(definitions).unwrap()
        })
}

fn emitted_names(resolver: &Resolver, registry: &Registry) -> Vec<String> {
    resolver
        .order(registry)
        .unwrap()
        .iter()
        .map(|d| d.name().to_string())
        .collect()
}

proptest! {
    #[test]
    fn prop_order_and_completeness(registry in acyclic_registry()) {
        let names = emitted_names(&Resolver::new(), &registry);
        prop_assert_eq!(names.len(), registry.len());

        let positions: HashMap<&str, usize> =
            names.iter().enumerate().map(|(i, n)| (n.as_str(), i)).collect();
        prop_assert_eq!(positions.len(), registry.len());

        for definition in &registry {
            let at = positions[definition.name().as_str()];
            for dep in definition.dependencies() {
                prop_assert!(positions[dep.as_str()] < at);
            }
        }
    }

    #[test]
    fn prop_deterministic(registry in acyclic_registry()) {
        let resolver = Resolver::new();
        prop_assert_eq!(emitted_names(&resolver, &registry), emitted_names(&resolver, &registry));
    }

    #[test]
    fn prop_closed_chain_is_circular(len in 1usize..60) {
        let registry = Registry::from_definitions((0..len).map(|i| {
            ServiceDefinition::build()
                .name(format!("svc{i}"))
                .dependency(format!("svc{}", (i + 1) % len))
                .create()
                .unwrap()
        }))
        .unwrap();

        let err = Resolver::new().order(&registry).unwrap_err();
        let cycle = err.cycle().cloned();
        prop_assert!(cycle.is_some());
        prop_assert_eq!(cycle.unwrap().len(), len);
    }

    #[test]
    fn prop_dangling_reference_is_missing(registry in acyclic_registry(), pick in any::<usize>()) {
        let mut definitions: Vec<ServiceDefinition> = registry.iter().cloned().collect();
        let victim = pick % definitions.len();
        let name = definitions[victim].name().clone();
        let replacement = ServiceDefinition::build()
            .name(name.clone())
            .dependencies(definitions[victim].dependencies().to_vec())
            .dependency("does-not-exist")
            .create()
            .unwrap();
        definitions[victim] = replacement;
        let registry = Registry::from_definitions(definitions).unwrap();

        let err = Resolver::new().order(&registry).unwrap_err();
        prop_assert!(
            matches!(err, ResolveError::MissingDependency { .. }),
            "unexpected error kind"
        );
        prop_assert_eq!(err.dependency().as_str(), "does-not-exist");
        prop_assert_eq!(err.service(), &name);
    }
}
