//! Order aggregate and related types.

mod aggregate;
mod item;
mod service;
mod state;

pub use aggregate::Order;
pub use item::OrderItem;
pub use service::OrderService;
pub use state::OrderStatus;

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Order ID is required.
    #[error("Id is required")]
    IdRequired,

    /// Customer ID is required.
    #[error("CustomerId is required")]
    CustomerIdRequired,

    /// Order has no items.
    #[error("Items are required")]
    NoItems,

    /// An item has a zero quantity.
    #[error("Invalid quantity for item {item_id} (must be greater than 0)")]
    InvalidQuantity { item_id: String },

    /// An item has a negative unit price.
    #[error("Invalid price: {price} (must not be negative)")]
    InvalidPrice { price: i64 },

    /// The order total exceeds the representable amount.
    #[error("Order total overflows")]
    TotalOverflow,

    /// Order is not in the expected status.
    #[error("Invalid status transition: cannot {action} from {current_status} status")]
    InvalidStatusTransition {
        current_status: OrderStatus,
        action: &'static str,
    },
}
