use thiserror::Error;

use crate::stats::StatsError;

#[derive(Debug, Error)]
pub enum ChunkgraphError {
    #[error("stats error: {0}")]
    Stats(#[from] StatsError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ChunkgraphError>;
