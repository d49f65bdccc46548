//! Domain layer for the order service.
//!
//! This crate provides:
//! - The order data model and its JSON wire representation
//! - [`Money`] for item costs and [`TotalAmount`] for summary totals
//! - The ingest validation rules ([`Order::validate`], [`validate_batch`])
//!
//! It performs no I/O and no logging.

pub mod error;
pub mod order;

pub use common::{CustomerId, ItemId, OrderId};
pub use error::ValidationError;
pub use order::{CustomerItem, Item, Money, Order, Summary, TotalAmount, validate_batch};
