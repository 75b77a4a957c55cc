//! Row records for stored aggregates.

use common::EntityId;
use domain::{Address, Customer, DomainError, Money, Order, OrderItem, OrderStatus, Product};
use serde::{Deserialize, Serialize};

/// Stored customer row. Address columns are all set or all empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: EntityId,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<u32>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: u64,
}

impl From<&Customer> for CustomerRecord {
    fn from(customer: &Customer) -> Self {
        let address = customer.address();
        Self {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            street: address.map(|a| a.street().to_string()),
            number: address.map(Address::number),
            zipcode: address.map(|a| a.zip().to_string()),
            city: address.map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = DomainError;

    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        // A partially filled address is reported as the first missing field.
        let address = match (record.street, record.number, record.zipcode, record.city) {
            (None, None, None, None) => None,
            (street, number, zip, city) => Some(Address::new(
                street.unwrap_or_default(),
                number.unwrap_or_default(),
                zip.unwrap_or_default(),
                city.unwrap_or_default(),
            )?),
        };
        Ok(Customer::restore(
            record.id,
            record.name,
            address,
            record.active,
            record.reward_points,
        )?)
    }
}

/// Stored product row. `price` is in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: EntityId,
    pub name: String,
    pub price: i64,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price().cents(),
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(Product::new(
            record.id,
            record.name,
            Money::from_cents(record.price),
        )?)
    }
}

/// Stored order line. Amounts are in cents; `price` is the line total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub id: EntityId,
    pub name: String,
    pub product_id: EntityId,
    pub quantity: u32,
    pub unit_price: i64,
    pub price: i64,
}

impl From<&OrderItem> for OrderItemRecord {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.cents(),
            price: item.price().cents(),
        }
    }
}

impl From<OrderItemRecord> for OrderItem {
    fn from(record: OrderItemRecord) -> Self {
        OrderItem::new(
            record.id,
            record.name,
            Money::from_cents(record.unit_price),
            record.product_id,
            record.quantity,
        )
    }
}

/// Stored order with its item rows. `total` is denormalized at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub total: i64,
    pub status: OrderStatus,
    pub items: Vec<OrderItemRecord>,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().clone(),
            customer_id: order.customer_id().clone(),
            total: order.total().cents(),
            status: order.status(),
            items: order.items().iter().map(OrderItemRecord::from).collect(),
        }
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = DomainError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let items = record.items.into_iter().map(OrderItem::from).collect();
        Ok(Order::restore(
            record.id,
            record.customer_id,
            items,
            record.status,
        )?)
    }
}
