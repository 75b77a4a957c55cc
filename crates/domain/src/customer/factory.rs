use common::EntityId;

use crate::error::Result;
use crate::events::{ShopDispatcher, ShopEvent, shared_dispatcher};

use super::{Address, Customer};

/// Creates customers with generated identifiers and announces them.
pub struct CustomerFactory;

impl CustomerFactory {
    /// Creates a customer and notifies the shared dispatcher.
    pub fn create(name: impl Into<String>) -> Result<Customer> {
        Self::create_via(name, shared_dispatcher())
    }

    /// Creates a customer and notifies `dispatcher` with a
    /// `CustomerCreatedEvent`.
    pub fn create_via(name: impl Into<String>, dispatcher: &ShopDispatcher) -> Result<Customer> {
        let customer = Customer::new(EntityId::generate(), name)?;
        Self::announce(customer, dispatcher)
    }

    /// Creates a customer that already has an address.
    pub fn create_with_address(name: impl Into<String>, address: Address) -> Result<Customer> {
        Self::create_with_address_via(name, address, shared_dispatcher())
    }

    pub fn create_with_address_via(
        name: impl Into<String>,
        address: Address,
        dispatcher: &ShopDispatcher,
    ) -> Result<Customer> {
        let mut customer = Customer::new(EntityId::generate(), name)?;
        customer.set_initial_address(address);
        Self::announce(customer, dispatcher)
    }

    fn announce(customer: Customer, dispatcher: &ShopDispatcher) -> Result<Customer> {
        tracing::info!(customer_id = %customer.id(), "customer created");
        dispatcher.notify(&ShopEvent::customer_created(&customer))?;
        Ok(customer)
    }
}
