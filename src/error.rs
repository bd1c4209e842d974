//! Benchmark error types.

use std::collections::TryReserveError;
use std::fmt;

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can abort a benchmark run.
///
/// There are no recoverable errors: both variants are reported and the
/// run stops before any timing output is produced.
#[derive(Debug)]
pub enum BenchError {
    /// Dimension or repetition count outside the accepted range.
    InvalidConfiguration(String),
    /// Matrix buffer could not be reserved.
    Allocation(TryReserveError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Allocation(e) => write!(f, "matrix allocation failed: {e}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Allocation(e) => Some(e),
            Self::InvalidConfiguration(_) => None,
        }
    }
}

impl From<TryReserveError> for BenchError {
    fn from(e: TryReserveError) -> Self {
        Self::Allocation(e)
    }
}
