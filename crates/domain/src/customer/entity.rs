//! Customer aggregate implementation.

use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::aggregate::Entity;
use crate::error::Result;
use crate::events::{ShopDispatcher, ShopEvent, shared_dispatcher};

use super::{Address, CustomerError};

/// Customer aggregate root.
///
/// Raises `AddressChangedEvent` whenever its address changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: EntityId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Entity for Customer {
    fn entity_type() -> &'static str {
        "Customer"
    }

    fn entity_id(&self) -> &EntityId {
        &self.id
    }
}

impl Customer {
    /// Creates an inactive customer without an address.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
    ) -> std::result::Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Rebuilds a stored customer from its full state.
    ///
    /// Applies the same invariants as the live operations: an active customer
    /// must have an address.
    pub fn restore(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        address: Option<Address>,
        active: bool,
        reward_points: u64,
    ) -> std::result::Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address,
            active,
            reward_points,
        };
        customer.validate()?;
        if customer.active && customer.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        Ok(customer)
    }

    fn validate(&self) -> std::result::Result<(), CustomerError> {
        if self.id.is_blank() {
            return Err(CustomerError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }
}

// Query methods
impl Customer {
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }
}

// State changes
impl Customer {
    /// Renames the customer. The name must not be blank.
    pub fn change_name(&mut self, name: impl Into<String>) -> std::result::Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Changes the address and notifies the shared dispatcher.
    pub fn change_address(&mut self, address: Address) -> Result<()> {
        self.change_address_via(address, shared_dispatcher())
    }

    /// Changes the address and notifies `dispatcher` with an
    /// `AddressChangedEvent`.
    ///
    /// The new address is kept even if a handler fails; the dispatch error is
    /// returned to the caller.
    pub fn change_address_via(
        &mut self,
        address: Address,
        dispatcher: &ShopDispatcher,
    ) -> Result<()> {
        let event = ShopEvent::address_changed(self, &address);
        self.address = Some(address);
        tracing::debug!(customer_id = %self.id, "customer address changed");
        dispatcher.notify(&event)?;
        Ok(())
    }

    /// Activates the customer. Requires an address.
    pub fn activate(&mut self) -> std::result::Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }

    pub(crate) fn set_initial_address(&mut self, address: Address) {
        self.address = Some(address);
    }
}
