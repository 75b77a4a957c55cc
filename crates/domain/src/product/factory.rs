use common::EntityId;

use crate::error::Result;
use crate::events::{ShopDispatcher, ShopEvent, shared_dispatcher};
use crate::money::Money;

use super::Product;

/// Creates products with generated identifiers and announces them.
pub struct ProductFactory;

impl ProductFactory {
    /// Creates a product and notifies the shared dispatcher.
    pub fn create(name: impl Into<String>, price: Money) -> Result<Product> {
        Self::create_via(name, price, shared_dispatcher())
    }

    /// Creates a product and notifies `dispatcher` with a `ProductCreatedEvent`.
    pub fn create_via(
        name: impl Into<String>,
        price: Money,
        dispatcher: &ShopDispatcher,
    ) -> Result<Product> {
        let product = Product::new(EntityId::generate(), name, price)?;
        tracing::info!(product_id = %product.id(), price = %product.price(), "product created");
        dispatcher.notify(&ShopEvent::product_created(&product))?;
        Ok(product)
    }
}
