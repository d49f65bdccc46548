//! Order data model and its JSON wire representation.

use common::{CustomerId, ItemId, OrderId};
use serde::{Deserialize, Serialize};

use super::{Money, TotalAmount};

/// One customer purchase event.
///
/// Deserialization is lenient about absent fields: missing identifiers decode
/// as empty strings and a missing `items` decodes as an empty list. Such an
/// order is syntactically valid and is then rejected by [`Order::validate`],
/// keeping "is this JSON an order batch" separate from "is this order
/// acceptable".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    /// Customer who placed the order.
    pub customer_id: CustomerId,

    /// Order identifier. Duplicates are accepted.
    pub order_id: OrderId,

    /// Opaque timestamp; never parsed.
    pub timestamp: String,

    /// Purchased items, in the order they were submitted.
    pub items: Vec<Item>,
}

impl Order {
    /// Creates a new order.
    pub fn new(
        customer_id: impl Into<CustomerId>,
        order_id: impl Into<OrderId>,
        timestamp: impl Into<String>,
        items: Vec<Item>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            order_id: order_id.into(),
            timestamp: timestamp.into(),
            items,
        }
    }
}

/// One line within an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub item_id: ItemId,
    pub cost_eur: Money,
}

impl Item {
    /// Creates a new item costing `cost_eur` euros.
    pub fn new(item_id: impl Into<ItemId>, cost_eur: i64) -> Self {
        Self {
            item_id: item_id.into(),
            cost_eur: Money::from_eur(cost_eur),
        }
    }
}

/// An item annotated with the customer who bought it.
///
/// Only produced as a query result; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerItem {
    pub customer_id: CustomerId,
    pub item_id: ItemId,
    pub cost_eur: Money,
}

impl CustomerItem {
    /// Projects a stored item for the given customer.
    pub fn from_item(customer_id: &CustomerId, item: &Item) -> Self {
        Self {
            customer_id: customer_id.clone(),
            item_id: item.item_id.clone(),
            cost_eur: item.cost_eur,
        }
    }
}

/// Per-customer purchase aggregate, computed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "customerId")]
    pub customer_id: CustomerId,

    /// Number of items across all of the customer's orders.
    #[serde(rename = "nbrOfPurchasedItems")]
    pub purchased_item_count: u64,

    /// Sum of item costs across all of the customer's orders.
    #[serde(rename = "totalAmountEur")]
    pub total_amount: TotalAmount,
}
