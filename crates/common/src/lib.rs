//! Shared types used by every layer of the storefront workspace.

pub mod types;

pub use types::EntityId;
