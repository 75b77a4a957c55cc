use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A line in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Line identifier.
    pub id: EntityId,

    /// Product name at the time of ordering.
    pub name: String,

    /// Price per unit.
    pub unit_price: Money,

    /// The ordered product.
    pub product_id: EntityId,

    /// Quantity ordered.
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        unit_price: Money,
        product_id: impl Into<EntityId>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Returns the line total (unit_price * quantity).
    pub fn price(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}
