use thiserror::Error;

use crate::{ConsistencyError, LoadError};

/// Unified error type for a benchmark run.
///
/// Lookups never fail; only loading the documents and the optional
/// consistency check can.
#[derive(Debug, Error)]
pub enum TtlBenchError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),

    #[error("failed to encode report: {0}")]
    Report(#[source] serde_json::Error),
}
