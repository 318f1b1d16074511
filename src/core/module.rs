use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of a module within a graph, typically its file path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single module as reported by the bundler's build statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleNode {
    pub name: String,
    pub size: u64,
    /// Named chunk groups (bundles) this module is emitted into. Order is not
    /// significant; the list is treated as a set.
    #[serde(default)]
    pub named_chunk_groups: Vec<String>,
    /// Identifiers of modules that require this one. Entries may be dangling,
    /// self-referential, or cyclic.
    #[serde(default)]
    pub parents: Vec<ModuleId>,
}

/// A raw module graph keyed by module identifier, as loaded from stats output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleGraph {
    pub modules: HashMap<ModuleId, ModuleNode>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, id: &ModuleId) -> Option<&ModuleNode> {
        self.modules.get(id)
    }
}
