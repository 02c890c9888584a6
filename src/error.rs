use thiserror::Error;

/// Usage errors raised by [`crate::VectorSpaceModel::query`] before any
/// vectorization work begins.
///
/// These are fail-fast and non-retryable; degenerate-but-valid inputs such
/// as an empty collection or empty document content never produce an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query string carries no signal; unlike document content, it must
    /// not be empty.
    #[error("query text must not be empty")]
    EmptyQuery,

    /// `k` must be at least 1.
    #[error("k must be a positive integer, got {k}")]
    InvalidK { k: usize },

    /// `k` asked for more results than the collection holds.
    #[error("k ({k}) exceeds collection size ({len})")]
    KExceedsCollection { k: usize, len: usize },
}
