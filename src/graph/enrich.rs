use std::collections::{BTreeMap, HashSet};

use crate::core::{ModuleGraph, ModuleId, ModuleNode};
use crate::graph::{EnrichedGraph, EnrichedModule, IdAllocator};

/// Builds a copy of a module graph annotated with child information and a
/// unique id for each node.
///
/// Module keys are processed in ascending order, and each module's parents in
/// ascending order, so repeated runs over the same input yield identical edge
/// orderings. Parent entries that name a module absent from the graph produce
/// no edge. Self-loops and cycles only ever contribute their direct edges, so
/// the pass always terminates.
pub fn enrich_graph(graph: &ModuleGraph, ids: &IdAllocator) -> EnrichedGraph {
    let mut enriched: BTreeMap<ModuleId, EnrichedModule> = BTreeMap::new();

    let mut names: Vec<&ModuleId> = graph.modules.keys().collect();
    names.sort();

    for module_name in names {
        let Some(node) = graph.get(module_name) else {
            continue;
        };
        materialize(module_name, node, ids, &mut enriched);

        let mut parent_names = node.parents.clone();
        parent_names.sort();

        for parent_name in &parent_names {
            // Dangling reference: skip, leaving no edge.
            let Some(parent_node) = graph.get(parent_name) else {
                continue;
            };
            materialize(parent_name, parent_node, ids, &mut enriched);

            let same_bundle = is_same_bundle(parent_node, node);
            if let Some(parent) = enriched.get_mut(parent_name) {
                parent.children.push(module_name.clone());
                if same_bundle {
                    parent.dependencies.push(module_name.clone());
                }
            }
            if same_bundle {
                if let Some(module) = enriched.get_mut(module_name) {
                    module.dependants.push(parent_name.clone());
                }
            }
        }
    }

    EnrichedGraph { modules: enriched }
}

/// Idempotent lookup-or-create: copies the node out of the input graph on
/// first sight and assigns it the next id.
fn materialize(
    name: &ModuleId,
    node: &ModuleNode,
    ids: &IdAllocator,
    enriched: &mut BTreeMap<ModuleId, EnrichedModule>,
) {
    enriched.entry(name.clone()).or_insert_with(|| EnrichedModule {
        module: node.clone(),
        id: ids.next_id(),
        children: Vec::new(),
        dependants: Vec::new(),
        dependencies: Vec::new(),
    });
}

/// True when every bundle the parent is emitted into also contains the child.
/// Not symmetric.
fn is_same_bundle(parent: &ModuleNode, child: &ModuleNode) -> bool {
    let child_groups: HashSet<&str> = child
        .named_chunk_groups
        .iter()
        .map(String::as_str)
        .collect();
    parent
        .named_chunk_groups
        .iter()
        .all(|group| child_groups.contains(group.as_str()))
}
