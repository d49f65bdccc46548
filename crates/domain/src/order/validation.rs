//! Ingest validation rules.

use crate::ValidationError;

use super::Order;

impl Order {
    /// Checks that the order carries every required field and that each item
    /// has an identifier and a strictly positive cost.
    ///
    /// `position` is the order's index in its batch and is reported back in
    /// the error. Rules are checked in a fixed order and the first violation
    /// wins.
    pub fn validate(&self, position: usize) -> Result<(), ValidationError> {
        if self.customer_id.is_empty() {
            return Err(ValidationError::MissingCustomerId { order: position });
        }
        if self.order_id.is_empty() {
            return Err(ValidationError::MissingOrderId { order: position });
        }
        if self.timestamp.is_empty() {
            return Err(ValidationError::MissingTimestamp { order: position });
        }
        if self.items.is_empty() {
            return Err(ValidationError::NoItems { order: position });
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.item_id.is_empty() {
                return Err(ValidationError::MissingItemId {
                    order: position,
                    item: index,
                });
            }
            if !item.cost_eur.is_positive() {
                return Err(ValidationError::InvalidCost {
                    order: position,
                    item: index,
                    cost: item.cost_eur,
                });
            }
        }

        Ok(())
    }
}

/// Validates every order of a batch, stopping at the first violation.
///
/// An empty batch is valid.
pub fn validate_batch(orders: &[Order]) -> Result<(), ValidationError> {
    orders
        .iter()
        .enumerate()
        .try_for_each(|(position, order)| order.validate(position))
}
