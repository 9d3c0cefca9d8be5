use thiserror::Error;

use crate::matching::MatchError;

/// Errors raised while loading a lookup batch or rendering a report.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to parse lookup batch: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read lookup batch: {0}")]
    Io(#[from] std::io::Error),

    /// Rows of a matrix must all have the same number of neighbors.
    #[error("{matrix} row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        matrix: &'static str,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("labels have {labels} rows but distances have {distances}")]
    RowCountMismatch { labels: usize, distances: usize },

    #[error("expected {expected} query labels, got {actual}")]
    QueryLabelCount { expected: usize, actual: usize },

    #[error("tensor error: {0}")]
    Tensor(#[from] candle_core::Error),

    #[error(transparent)]
    Match(#[from] MatchError),
}

pub type LookupResult<T> = Result<T, LookupError>;
