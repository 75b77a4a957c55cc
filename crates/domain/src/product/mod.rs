//! Product entity and related types.

mod entity;
mod factory;
mod handlers;
mod service;

pub use entity::Product;
pub use factory::ProductFactory;
pub use handlers::SendEmailWhenProductIsCreated;
pub use service::ProductService;

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// Product ID is required.
    #[error("Id is required")]
    IdRequired,

    /// Product name is required.
    #[error("Name is required")]
    NameRequired,

    /// Prices cannot be negative.
    #[error("Invalid price: {price} (must not be negative)")]
    NegativePrice { price: i64 },

    /// A price increase would exceed the representable amount.
    #[error("Price of product {product_id} overflows when increased by {percentage}%")]
    PriceOverflow { product_id: String, percentage: u32 },
}
