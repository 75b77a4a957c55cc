//! Event handler capability.

use thiserror::Error;

use crate::event::DomainEvent;

/// Errors a handler may report back to the dispatcher.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The handler was registered under a name whose payload it cannot handle.
    #[error("Handler {handler} cannot handle event {event_name}")]
    UnexpectedEvent {
        handler: &'static str,
        event_name: &'static str,
    },

    /// The side effect failed.
    #[error("Handler failed: {0}")]
    Failed(String),
}

impl HandlerError {
    pub fn failed(reason: impl Into<String>) -> Self {
        HandlerError::Failed(reason.into())
    }
}

/// A reaction to a domain event.
///
/// Handlers are invoked synchronously by the dispatcher and are observable
/// only through their side effects.
pub trait EventHandler<P>: Send + Sync {
    /// Returns the handler name used in logs and failure reports.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Handles a single event.
    fn handle(&self, event: &DomainEvent<P>) -> Result<(), HandlerError>;
}
