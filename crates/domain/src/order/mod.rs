//! Orders, their items, and the read-side projections built from them.

mod model;
mod validation;
mod value_objects;

pub use model::{CustomerItem, Item, Order, Summary};
pub use validation::validate_batch;
pub use value_objects::{Money, TotalAmount};
