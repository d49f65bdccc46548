//! Domain error types.

use thiserror::Error;

use crate::Money;

/// Reasons an order batch is rejected on ingest.
///
/// `order` is the position of the offending order within its batch and
/// `item` the position of the offending item within that order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("order is missing required fields or has invalid cost: order {order} has an empty customerId")]
    MissingCustomerId { order: usize },

    #[error("order is missing required fields or has invalid cost: order {order} has an empty orderId")]
    MissingOrderId { order: usize },

    #[error("order is missing required fields or has invalid cost: order {order} has an empty timestamp")]
    MissingTimestamp { order: usize },

    #[error("order is missing required fields or has invalid cost: order {order} has no items")]
    NoItems { order: usize },

    #[error("item is missing required fields or has invalid cost: item {item} of order {order} has an empty itemId")]
    MissingItemId { order: usize, item: usize },

    #[error("item is missing required fields or has invalid cost: item {item} of order {order} costs {cost} (must be greater than 0)")]
    InvalidCost { order: usize, item: usize, cost: Money },
}
