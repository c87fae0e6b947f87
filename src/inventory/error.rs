//! Inventory error definitions.

use thiserror::Error;

/// Errors raised by room store and reservation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// No room with the given id.
    #[error("room {0} not found")]
    NotFound(String),

    /// Negative reservation quantity.
    #[error("cannot reserve {0} rooms")]
    InvalidQuantity(i64),

    /// Reservation exceeds the remaining room count.
    #[error("requested {requested} rooms but only {remaining} remain")]
    OverCapacity { requested: i64, remaining: i64 },
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;
