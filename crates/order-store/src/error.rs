use domain::ValidationError;
use thiserror::Error;

use crate::CustomerId;

/// Errors that can occur when interacting with the order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A candidate order in the batch failed validation.
    /// Nothing from the batch was appended.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The customer has no items in the store, either because the ID is
    /// unknown or because none of its orders carry items.
    #[error("customer not found or no items")]
    CustomerNotFound { customer_id: CustomerId },

    /// A thread panicked while holding the store lock.
    #[error("order store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Returns true for store-level faults, as opposed to outcomes caused by
    /// the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::LockPoisoned)
    }
}

/// Result type for order store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
