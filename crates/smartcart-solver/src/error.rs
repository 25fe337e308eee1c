//! Search invariant violations.

use smartcart_core::SmartCartError;
use thiserror::Error;

/// An invariant broken inside the genetic search.
///
/// These never reach callers directly; the optimizer converts them into
/// [`SmartCartError::OptimizationFailed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Genetic algorithm index error: individual length {actual} does not match items length {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Genetic algorithm index error: index {index} out of range for items length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Genetic algorithm index error: index {0} appears more than once")]
    DuplicateIndex(usize),

    /// The best individual decoded to a route with no finite distance.
    #[error("best route has no finite distance")]
    UnboundedFitness,
}

impl From<SearchError> for SmartCartError {
    fn from(err: SearchError) -> Self {
        SmartCartError::OptimizationFailed(err.to_string())
    }
}
