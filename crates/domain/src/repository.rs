//! Repository contracts consumed by the domain.
//!
//! Implementations live in the infrastructure crate.

use async_trait::async_trait;
use common::EntityId;

use crate::aggregate::Entity;
use crate::customer::Customer;
use crate::error::Result;
use crate::order::Order;
use crate::product::Product;

/// Persistence contract shared by every aggregate.
#[async_trait]
pub trait Repository<T: Entity + Sized>: Send + Sync {
    /// Stores a new entity.
    ///
    /// Fails with [`DomainError::AlreadyExists`](crate::DomainError::AlreadyExists)
    /// if the id is taken.
    async fn create(&self, entity: &T) -> Result<()>;

    /// Replaces the stored state of an existing entity.
    ///
    /// Fails with [`DomainError::NotFound`](crate::DomainError::NotFound) if
    /// the entity was never created.
    async fn update(&self, entity: &T) -> Result<()>;

    /// Loads an entity by id.
    ///
    /// Fails with [`DomainError::NotFound`](crate::DomainError::NotFound) when
    /// absent.
    async fn find(&self, id: &EntityId) -> Result<T>;

    /// Loads every stored entity, ordered by id.
    async fn find_all(&self) -> Result<Vec<T>>;
}

/// Customer persistence.
pub trait CustomerRepository: Repository<Customer> {}

/// Product persistence.
pub trait ProductRepository: Repository<Product> {}

/// Order persistence.
///
/// `update` only persists the order status; items are immutable once
/// created.
pub trait OrderRepository: Repository<Order> {}
