use domain::{CustomerItem, Order, Summary};

use crate::{CustomerId, Result};

/// Core trait for order store implementations.
///
/// A store owns an append-only sequence of validated orders and exposes it
/// only through these operations. Implementations must be thread-safe and
/// must give every call a consistent view: a call that starts after an
/// append has returned sees all of that append, and no call ever sees part
/// of a batch.
pub trait OrderStore: Send + Sync {
    /// Appends a batch of orders.
    ///
    /// The whole batch is validated before anything is committed. If any
    /// order fails validation the call returns [`StoreError::Validation`]
    /// for the first violation and the store is left unchanged. On success
    /// the orders are appended in batch order.
    ///
    /// [`StoreError::Validation`]: crate::StoreError::Validation
    fn append(&self, orders: Vec<Order>) -> Result<()>;

    /// Returns every item purchased by a customer, in store order.
    ///
    /// Orders are visited in insertion order and items in their stored order
    /// within each order. Fails with [`StoreError::CustomerNotFound`] when the
    /// result would be empty.
    ///
    /// [`StoreError::CustomerNotFound`]: crate::StoreError::CustomerNotFound
    fn items_by_customer(&self, customer_id: &CustomerId) -> Result<Vec<CustomerItem>>;

    /// Computes item count and total spend for every customer in the store.
    ///
    /// Returns an empty list for an empty store. Summaries are sorted by
    /// customer ID, but callers should not rely on any particular order.
    fn summaries(&self) -> Result<Vec<Summary>>;

    /// Returns the number of orders held.
    fn order_count(&self) -> Result<usize>;
}

/// Extension trait providing convenience methods for order stores.
pub trait OrderStoreExt: OrderStore {
    /// Appends a single order.
    fn append_order(&self, order: Order) -> Result<()> {
        self.append(vec![order])
    }

    /// Returns the summary of one customer, if it has any items.
    fn summary_for(&self, customer_id: &CustomerId) -> Result<Option<Summary>> {
        Ok(self
            .summaries()?
            .into_iter()
            .find(|summary| &summary.customer_id == customer_id))
    }
}

// Blanket implementation for all OrderStore implementations
impl<T: OrderStore + ?Sized> OrderStoreExt for T {}
