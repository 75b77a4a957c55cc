//! Persistence adapters for the storefront domain.
//!
//! Repositories store flat row records, the same shape a relational table
//! would hold, and rebuild aggregates through their validating constructors
//! on the way out.

pub mod memory;
pub mod records;

pub use memory::{InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository};
pub use records::{CustomerRecord, OrderItemRecord, OrderRecord, ProductRecord};
