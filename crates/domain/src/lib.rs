//! Domain layer for the storefront.
//!
//! This crate provides:
//! - Customer, Product and Order aggregates with their invariants
//! - `Address` and `Money` value objects
//! - Storefront domain events, sample handlers, and the shared dispatcher
//! - Factories and domain services
//! - Repository contracts

pub mod aggregate;
pub mod console;
pub mod customer;
pub mod error;
pub mod events;
pub mod money;
pub mod order;
pub mod product;
pub mod repository;

pub use aggregate::Entity;
pub use console::Console;
pub use customer::{
    Address, AddressError, Customer, CustomerError, CustomerFactory, LogAddressChanged,
    LogCustomerCreatedFirst, LogCustomerCreatedSecond,
};
pub use error::{DomainError, Result};
pub use events::{
    ADDRESS_CHANGED, AddressChangedData, CUSTOMER_CREATED, CustomerCreatedData, PRODUCT_CREATED,
    ProductCreatedData, ShopDispatcher, ShopEvent, init_shared_dispatcher, shared_dispatcher,
};
pub use money::Money;
pub use order::{Order, OrderError, OrderItem, OrderService, OrderStatus};
pub use product::{
    Product, ProductError, ProductFactory, ProductService, SendEmailWhenProductIsCreated,
};
pub use repository::{CustomerRepository, OrderRepository, ProductRepository, Repository};
