//! Error types for SmartCart

use thiserror::Error;

/// Main error type for route optimization requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SmartCartError {
    /// The shopping list contained no items.
    #[error("Shopping list is empty.")]
    EmptyShoppingList,

    /// One or more items could not be mapped to a shelf section.
    ///
    /// Carries every unresolved name, in input order.
    #[error("Items not found or not mapped to shelves: {}", .0.join(", "))]
    UnknownItems(Vec<String>),

    /// The search failed internally (broken encoding or index invariant).
    #[error("Route optimization failed: {0}")]
    OptimizationFailed(String),
}

impl SmartCartError {
    /// Returns true for errors caused by the request itself rather than the search.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyShoppingList | Self::UnknownItems(_))
    }
}

/// Result type alias for SmartCart operations
pub type Result<T> = std::result::Result<T, SmartCartError>;
