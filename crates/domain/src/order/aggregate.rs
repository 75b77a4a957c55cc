//! Order aggregate implementation.

use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::aggregate::Entity;
use crate::money::Money;

use super::{OrderError, OrderItem, OrderStatus};

/// Order aggregate root.
///
/// An order always has at least one item, every item has a positive
/// quantity, and the status only moves forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: EntityId,
    customer_id: EntityId,
    items: Vec<OrderItem>,
    status: OrderStatus,
}

impl Entity for Order {
    fn entity_type() -> &'static str {
        "Order"
    }

    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Order {
    /// Creates a pending order.
    pub fn new(
        id: impl Into<EntityId>,
        customer_id: impl Into<EntityId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        Self::restore(id, customer_id, items, OrderStatus::Pending)
    }

    /// Rebuilds a stored order, status included, under the same invariants
    /// as [`Order::new`].
    pub fn restore(
        id: impl Into<EntityId>,
        customer_id: impl Into<EntityId>,
        items: Vec<OrderItem>,
        status: OrderStatus,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
            status,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_blank() {
            return Err(OrderError::IdRequired);
        }
        if self.customer_id.is_blank() {
            return Err(OrderError::CustomerIdRequired);
        }
        if self.items.is_empty() {
            return Err(OrderError::NoItems);
        }
        for item in &self.items {
            if item.quantity == 0 {
                return Err(OrderError::InvalidQuantity {
                    item_id: item.id.to_string(),
                });
            }
            if item.unit_price.is_negative() {
                return Err(OrderError::InvalidPrice {
                    price: item.unit_price.cents(),
                });
            }
        }
        self.items
            .iter()
            .try_fold(Money::zero(), |total, item| {
                item.unit_price
                    .checked_multiply(item.quantity)
                    .and_then(|price| total.checked_add(price))
            })
            .ok_or(OrderError::TotalOverflow)?;
        Ok(())
    }
}

// Query methods
impl Order {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn customer_id(&self) -> &EntityId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Returns the sum of all line totals.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::price).sum()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

// Status transitions
impl Order {
    /// Approves a pending order.
    pub fn approve(&mut self) -> Result<(), OrderError> {
        if !self.status.can_approve() {
            return Err(OrderError::InvalidStatusTransition {
                current_status: self.status,
                action: "approve",
            });
        }
        self.status = OrderStatus::Approved;
        Ok(())
    }

    /// Ships the order.
    pub fn ship(&mut self) -> Result<(), OrderError> {
        if !self.status.can_ship() {
            return Err(OrderError::InvalidStatusTransition {
                current_status: self.status,
                action: "ship",
            });
        }
        self.status = OrderStatus::Shipped;
        Ok(())
    }
}
