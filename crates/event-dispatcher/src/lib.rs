//! Synchronous domain-event dispatch.
//!
//! This crate provides:
//! - [`DomainEvent`], an immutable envelope around an [`EventPayload`]
//! - [`EventHandler`], the capability invoked with an event
//! - [`EventDispatcher`], a registry mapping event names to ordered handler lists

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;

pub use dispatcher::{EventDispatcher, FailurePolicy};
pub use error::{DispatchError, HandlerFailure, Result, UnknownPolicy};
pub use event::{DomainEvent, EventId, EventPayload};
pub use handler::{EventHandler, HandlerError};
