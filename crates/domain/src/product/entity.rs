use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::aggregate::Entity;
use crate::money::Money;

use super::ProductError;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: EntityId,
    name: String,
    price: Money,
}

impl Entity for Product {
    fn entity_type() -> &'static str {
        "Product"
    }

    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Product {
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) -> Result<(), ProductError> {
        if price.is_negative() {
            return Err(ProductError::NegativePrice {
                price: price.cents(),
            });
        }
        self.price = price;
        Ok(())
    }

    fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_blank() {
            return Err(ProductError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if self.price.is_negative() {
            return Err(ProductError::NegativePrice {
                price: self.price.cents(),
            });
        }
        Ok(())
    }
}
