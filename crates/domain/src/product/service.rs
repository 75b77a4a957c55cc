use super::{Product, ProductError};

/// Operations spanning several products.
pub struct ProductService;

impl ProductService {
    /// Raises every product's price by `percentage` percent.
    ///
    /// Prices are rounded to the nearest cent. If any new price would
    /// overflow, no product is changed.
    pub fn increase_price(products: &mut [Product], percentage: u32) -> Result<(), ProductError> {
        let new_prices = products
            .iter()
            .map(|product| {
                product
                    .price()
                    .checked_increase_by_percent(percentage)
                    .ok_or_else(|| ProductError::PriceOverflow {
                        product_id: product.id().to_string(),
                        percentage,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (product, price) in products.iter_mut().zip(new_prices) {
            product.change_price(price)?;
        }
        tracing::debug!(count = products.len(), percentage, "increased product prices");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_increase_price_of_all_products() {
        let mut products = vec![
            Product::new("p1", "Product 1", Money::from_dollars(10)).unwrap(),
            Product::new("p2", "Product 2", Money::from_dollars(20)).unwrap(),
        ];

        ProductService::increase_price(&mut products, 100).unwrap();

        assert_eq!(products[0].price(), Money::from_dollars(20));
        assert_eq!(products[1].price(), Money::from_dollars(40));
    }

    #[test]
    fn test_increase_price_rounds_to_cents() {
        let mut products = vec![Product::new("p1", "Gadget", Money::from_cents(333)).unwrap()];

        ProductService::increase_price(&mut products, 15).unwrap();

        assert_eq!(products[0].price().cents(), 383);
    }

    #[test]
    fn test_increase_price_overflow_leaves_prices_unchanged() {
        let mut products = vec![
            Product::new("p1", "Cheap", Money::from_cents(100)).unwrap(),
            Product::new("p2", "Pricey", Money::from_cents(10_000_000_000)).unwrap(),
        ];

        let result = ProductService::increase_price(&mut products, u32::MAX);

        assert_eq!(
            result,
            Err(ProductError::PriceOverflow {
                product_id: "p2".to_string(),
                percentage: u32::MAX,
            })
        );
        assert_eq!(products[0].price(), Money::from_cents(100));
        assert_eq!(products[1].price(), Money::from_cents(10_000_000_000));
    }

    #[test]
    fn test_increase_price_of_empty_slice() {
        let mut products: Vec<Product> = Vec::new();
        assert!(ProductService::increase_price(&mut products, 10).is_ok());
    }
}
