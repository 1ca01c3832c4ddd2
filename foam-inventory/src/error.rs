//! Core error taxonomy.
//!
//! Only whole-source failures live here. Per-row anomalies (blank names,
//! unparseable numbers, unknown status labels) are absorbed locally by the
//! normalizer as skips or coercions and never escalate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read sheet '{path}'")]
    Source {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sheet data")]
    Parse(#[from] csv::Error),
}

/// Result type alias for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
