use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use domain::{CustomerItem, Order, Summary, TotalAmount, validate_batch};

use crate::{CustomerId, OrderStore, Result, StoreError};

/// In-memory order store.
///
/// Orders live in a single `Vec` behind one reader-writer lock. Appends take
/// the lock exclusively; item and summary queries share it. Clones are
/// handles to the same underlying sequence.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `orders`, validated like any other batch.
    pub fn with_orders(orders: Vec<Order>) -> Result<Self> {
        let store = Self::new();
        store.append(orders)?;
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Order>>> {
        self.orders.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Order>>> {
        self.orders.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl OrderStore for InMemoryOrderStore {
    fn append(&self, orders: Vec<Order>) -> Result<()> {
        // Validated before locking: the batch is owned by this call.
        validate_batch(&orders)?;

        let mut store = self.write()?;
        store.extend(orders);
        Ok(())
    }

    fn items_by_customer(&self, customer_id: &CustomerId) -> Result<Vec<CustomerItem>> {
        let store = self.read()?;
        let items: Vec<CustomerItem> = store
            .iter()
            .filter(|order| &order.customer_id == customer_id)
            .flat_map(|order| order.items.iter())
            .map(|item| CustomerItem::from_item(customer_id, item))
            .collect();

        if items.is_empty() {
            return Err(StoreError::CustomerNotFound {
                customer_id: customer_id.clone(),
            });
        }
        Ok(items)
    }

    fn order_count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    fn summaries(&self) -> Result<Vec<Summary>> {
        let store = self.read()?;

        let mut totals: HashMap<&CustomerId, (u64, TotalAmount)> = HashMap::new();
        for order in store.iter() {
            for item in &order.items {
                let (count, total) = totals.entry(&order.customer_id).or_default();
                *count += 1;
                total.add_cost(item.cost_eur);
            }
        }

        let mut summaries: Vec<Summary> = totals
            .into_iter()
            .map(|(customer_id, (count, total))| Summary {
                customer_id: customer_id.clone(),
                purchased_item_count: count,
                total_amount: total,
            })
            .collect();

        // HashMap iteration order is arbitrary; sort so responses are stable.
        summaries.sort_by(|a, b| a.customer_id.cmp(&b.customer_id));
        Ok(summaries)
    }
}
