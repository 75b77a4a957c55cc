//! Domain error types.

use common::EntityId;
use event_dispatcher::DispatchError;
use thiserror::Error;

use crate::customer::{AddressError, CustomerError};
use crate::order::OrderError;
use crate::product::ProductError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A customer invariant was violated.
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    /// An address could not be built.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// A product invariant was violated.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// An order invariant was violated.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// No entity with the given id exists.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// An entity with the given id already exists.
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: EntityId },

    /// A handler failed while reacting to a domain event.
    #[error("Event dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl Into<EntityId>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Returns true if this is a [`DomainError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
