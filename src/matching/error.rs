use thiserror::Error;

/// Errors raised while deriving predictions from lookup results.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The tensor backend rejected an operation (bad rank, empty axis, dtype).
    #[error("tensor error: {0}")]
    Tensor(#[from] candle_core::Error),

    #[error("shape mismatch: {reason}")]
    ShapeMismatch { reason: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("unknown matching strategy '{name}'")]
    UnknownStrategy { name: String },
}

pub type MatchResult<T> = Result<T, MatchError>;
