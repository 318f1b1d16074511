use std::collections::HashSet;

use crate::core::ModuleId;
use crate::graph::EnrichedGraph;

pub fn children_of(graph: &EnrichedGraph, module: &ModuleId) -> Vec<ModuleId> {
    graph
        .get(module)
        .map(|entry| entry.children.clone())
        .unwrap_or_default()
}

pub fn dependants_of(graph: &EnrichedGraph, module: &ModuleId) -> Vec<ModuleId> {
    graph
        .get(module)
        .map(|entry| entry.dependants.clone())
        .unwrap_or_default()
}

pub fn dependencies_of(graph: &EnrichedGraph, module: &ModuleId) -> Vec<ModuleId> {
    graph
        .get(module)
        .map(|entry| entry.dependencies.clone())
        .unwrap_or_default()
}

/// Direct children that do not share bundle membership with this module,
/// i.e. `children` minus the same-bundle `dependencies`.
pub fn cross_bundle_children_of(graph: &EnrichedGraph, module: &ModuleId) -> Vec<ModuleId> {
    let Some(entry) = graph.get(module) else {
        return Vec::new();
    };
    let same_bundle: HashSet<&ModuleId> = entry.dependencies.iter().collect();
    entry
        .children
        .iter()
        .filter(|child| !same_bundle.contains(child))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::core::{ModuleGraph, ModuleId, ModuleNode};
    use crate::graph::enrich::enrich_graph;
    use crate::graph::ops::{children_of, cross_bundle_children_of, dependencies_of};
    use crate::graph::IdAllocator;

    fn sample_graph() -> ModuleGraph {
        let mut modules = HashMap::new();
        modules.insert(
            ModuleId::new("lib/foo"),
            ModuleNode {
                name: "foo".to_string(),
                size: 10,
                named_chunk_groups: vec!["Mail".to_string(), "Fake".to_string()],
                parents: Vec::new(),
            },
        );
        modules.insert(
            ModuleId::new("lib/bar"),
            ModuleNode {
                name: "bar".to_string(),
                size: 10,
                named_chunk_groups: vec![
                    "Mail".to_string(),
                    "Fake".to_string(),
                    "Chunk".to_string(),
                ],
                parents: vec![ModuleId::new("lib/foo")],
            },
        );
        modules.insert(
            ModuleId::new("lib/baz"),
            ModuleNode {
                name: "baz".to_string(),
                size: 10,
                named_chunk_groups: vec!["Mail".to_string(), "Chunk".to_string()],
                parents: vec![ModuleId::new("lib/foo")],
            },
        );
        ModuleGraph { modules }
    }

    #[test]
    fn cross_bundle_children_are_children_minus_dependencies() {
        let enriched = enrich_graph(&sample_graph(), &IdAllocator::new());
        let foo = ModuleId::new("lib/foo");

        assert_eq!(
            children_of(&enriched, &foo),
            [ModuleId::new("lib/bar"), ModuleId::new("lib/baz")]
        );
        assert_eq!(dependencies_of(&enriched, &foo), [ModuleId::new("lib/bar")]);
        assert_eq!(
            cross_bundle_children_of(&enriched, &foo),
            [ModuleId::new("lib/baz")]
        );
    }

    #[test]
    fn lookups_on_unknown_modules_are_empty() {
        let enriched = enrich_graph(&sample_graph(), &IdAllocator::new());
        let missing = ModuleId::new("lib/missing");

        assert!(children_of(&enriched, &missing).is_empty());
        assert!(cross_bundle_children_of(&enriched, &missing).is_empty());
    }
}
