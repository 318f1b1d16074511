use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::ModuleGraph;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats file not found: {0}")]
    StatsNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse stats at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StatsError>;

// Stats documents either carry the graph under a "graph" key (full bundle
// stats output) or are the bare id -> module object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatsDocument {
    Wrapped { graph: ModuleGraph },
    Bare(ModuleGraph),
}

/// Loads a module graph from a bundler stats JSON file.
pub fn load_module_graph(path: &Path) -> Result<ModuleGraph> {
    if !path.is_file() {
        return Err(StatsError::StatsNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let document: StatsDocument =
        serde_json::from_str(&content).map_err(|source| StatsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(match document {
        StatsDocument::Wrapped { graph } => graph,
        StatsDocument::Bare(graph) => graph,
    })
}
