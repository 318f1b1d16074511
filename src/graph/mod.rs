use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::core::{ModuleId, ModuleNode};

pub mod enrich;
pub mod ops;

pub use enrich::enrich_graph;

/// A module copied out of the raw graph and annotated with its computed
/// relationships.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedModule {
    #[serde(flatten)]
    pub module: ModuleNode,
    /// Unique within all graphs produced from the same [`IdAllocator`].
    pub id: u64,
    /// Modules whose `parents` list names this one, in visit order. May
    /// contain duplicates when a child declares the same parent twice.
    pub children: Vec<ModuleId>,
    /// Parents of this module whose bundle set is covered by this module's
    /// bundle set (same-bundle edges, recorded on the child endpoint).
    pub dependants: Vec<ModuleId>,
    /// Children of this module covered by the same-bundle predicate (the
    /// parent-endpoint view of the edges in `dependants`).
    pub dependencies: Vec<ModuleId>,
}

/// An enriched graph. Sorted by module identifier so serialized output is
/// stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EnrichedGraph {
    pub modules: BTreeMap<ModuleId, EnrichedModule>,
}

impl EnrichedGraph {
    pub fn get(&self, id: &ModuleId) -> Option<&EnrichedModule> {
        self.modules.get(id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Hands out numeric module ids, starting at 1. Callers that need ids to stay
/// unique across several enrichment passes reuse one allocator; otherwise a
/// fresh allocator per pass is fine. Increments are atomic so an allocator
/// shared between threads still never repeats an id.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
