pub mod error;
pub mod memory;
pub mod store;

pub use common::CustomerId;
pub use error::{Result, StoreError};
pub use memory::InMemoryOrderStore;
pub use store::{OrderStore, OrderStoreExt};
