//! Core entity trait.

use common::EntityId;

/// Trait for entities with identity.
///
/// Entities are compared by identifier rather than by value. Repositories use
/// the entity type name when reporting missing or duplicate rows.
pub trait Entity: Send + Sync {
    /// Returns the entity type name (e.g., "Customer", "Order").
    fn entity_type() -> &'static str
    where
        Self: Sized;

    /// Returns the entity's unique identifier.
    fn entity_id(&self) -> &EntityId;
}
