//! Storefront domain events and the shared dispatcher.

use std::sync::OnceLock;

use common::EntityId;
use event_dispatcher::{DomainEvent, EventDispatcher, EventPayload, FailurePolicy};
use serde::{Deserialize, Serialize};

use crate::customer::{Address, Customer};
use crate::product::Product;

/// Routing name for [`ShopEvent::CustomerCreated`].
pub const CUSTOMER_CREATED: &str = "CustomerCreatedEvent";

/// Routing name for [`ShopEvent::AddressChanged`].
pub const ADDRESS_CHANGED: &str = "AddressChangedEvent";

/// Routing name for [`ShopEvent::ProductCreated`].
pub const PRODUCT_CREATED: &str = "ProductCreatedEvent";

/// Events raised by storefront aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShopEvent {
    /// A customer was created through a factory.
    CustomerCreated(CustomerCreatedData),

    /// A customer's address was changed.
    AddressChanged(AddressChangedData),

    /// A product was created through a factory.
    ProductCreated(ProductCreatedData),
}

impl EventPayload for ShopEvent {
    fn event_name(&self) -> &'static str {
        match self {
            ShopEvent::CustomerCreated(_) => CUSTOMER_CREATED,
            ShopEvent::AddressChanged(_) => ADDRESS_CHANGED,
            ShopEvent::ProductCreated(_) => PRODUCT_CREATED,
        }
    }
}

/// Data for CustomerCreated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreatedData {
    /// Snapshot of the new customer.
    pub customer: Customer,
}

/// Data for AddressChanged event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressChangedData {
    pub customer_id: EntityId,
    pub name: String,
    /// The address after the change.
    pub address: Address,
}

/// Data for ProductCreated event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedData {
    /// Snapshot of the new product.
    pub product: Product,
}

// Convenience constructors for events
impl ShopEvent {
    /// Creates a CustomerCreated event.
    pub fn customer_created(customer: &Customer) -> DomainEvent<ShopEvent> {
        DomainEvent::new(ShopEvent::CustomerCreated(CustomerCreatedData {
            customer: customer.clone(),
        }))
    }

    /// Creates an AddressChanged event for the customer's current address.
    pub fn address_changed(customer: &Customer, address: &Address) -> DomainEvent<ShopEvent> {
        DomainEvent::new(ShopEvent::AddressChanged(AddressChangedData {
            customer_id: customer.id().clone(),
            name: customer.name().to_string(),
            address: address.clone(),
        }))
    }

    /// Creates a ProductCreated event.
    pub fn product_created(product: &Product) -> DomainEvent<ShopEvent> {
        DomainEvent::new(ShopEvent::ProductCreated(ProductCreatedData {
            product: product.clone(),
        }))
    }
}

/// Dispatcher type used throughout the storefront domain.
pub type ShopDispatcher = EventDispatcher<ShopEvent>;

static SHARED: OnceLock<ShopDispatcher> = OnceLock::new();

/// Returns the process-wide dispatcher, creating it on first use.
///
/// Aggregates and factories notify this instance unless a dispatcher is
/// passed explicitly through their `*_via` methods. Registrations persist for
/// the lifetime of the process; call `unregister_all` to reset.
pub fn shared_dispatcher() -> &'static ShopDispatcher {
    SHARED.get_or_init(ShopDispatcher::new)
}

/// Creates the process-wide dispatcher with the given failure policy.
///
/// Has no effect on the policy if the dispatcher already exists; the existing
/// instance is returned.
pub fn init_shared_dispatcher(policy: FailurePolicy) -> &'static ShopDispatcher {
    let dispatcher = SHARED.get_or_init(|| ShopDispatcher::with_policy(policy));
    if dispatcher.policy() != policy {
        tracing::warn!(
            requested = %policy,
            active = %dispatcher.policy(),
            "shared dispatcher already initialized, keeping existing policy"
        );
    }
    dispatcher
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_event_names() {
        let customer = Customer::new("c1", "Customer 1").unwrap();
        let address = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        let product = Product::new("p1", "Product 1", Money::from_dollars(10)).unwrap();

        assert_eq!(ShopEvent::customer_created(&customer).name(), CUSTOMER_CREATED);
        assert_eq!(
            ShopEvent::address_changed(&customer, &address).name(),
            ADDRESS_CHANGED
        );
        assert_eq!(ShopEvent::product_created(&product).name(), PRODUCT_CREATED);
    }

    #[test]
    fn test_address_changed_carries_customer_details() {
        let customer = Customer::new("c1", "Juan").unwrap();
        let address = Address::new("R Flores", 123, "90999-909", "Ipatinga").unwrap();

        let event = ShopEvent::address_changed(&customer, &address);

        match event.payload() {
            ShopEvent::AddressChanged(data) => {
                assert_eq!(data.customer_id.as_str(), "c1");
                assert_eq!(data.name, "Juan");
                assert_eq!(data.address, address);
            }
            other => panic!("Expected AddressChanged event, got {other:?}"),
        }
    }

    #[test]
    fn test_event_serialization() {
        let customer = Customer::new("c1", "Customer 1").unwrap();
        let event = ShopEvent::customer_created(&customer);

        let json = serde_json::to_string(event.payload()).unwrap();
        assert!(json.contains("CustomerCreated"));

        let deserialized: ShopEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.event_name(), CUSTOMER_CREATED);
    }

    #[test]
    fn test_shared_dispatcher_is_a_single_instance() {
        let a = shared_dispatcher();
        let b = shared_dispatcher();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(a, init_shared_dispatcher(a.policy())));
    }
}
