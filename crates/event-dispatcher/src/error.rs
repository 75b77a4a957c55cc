use thiserror::Error;

use crate::handler::HandlerError;

/// A single handler failure collected while dispatching.
#[derive(Debug)]
pub struct HandlerFailure {
    /// Name of the failing handler.
    pub handler: &'static str,

    /// The error it reported.
    pub error: HandlerError,
}

impl std::fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.handler, self.error)
    }
}

/// Errors that can occur when notifying handlers.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A handler failed and the remaining handlers were skipped.
    #[error("Handler {handler} failed for event {event_name}: {source}")]
    HandlerFailed {
        event_name: &'static str,
        handler: &'static str,
        #[source]
        source: HandlerError,
    },

    /// One or more handlers failed; every handler was still invoked.
    #[error("{} handler(s) failed for event {event_name}", .failures.len())]
    HandlersFailed {
        event_name: &'static str,
        failures: Vec<HandlerFailure>,
    },
}

impl DispatchError {
    /// Returns the name of the event whose dispatch failed.
    pub fn event_name(&self) -> &'static str {
        match self {
            DispatchError::HandlerFailed { event_name, .. }
            | DispatchError::HandlersFailed { event_name, .. } => *event_name,
        }
    }
}

/// Returned when a failure policy name cannot be parsed.
#[derive(Debug, Error)]
#[error("Unknown failure policy: {0}")]
pub struct UnknownPolicy(pub String);

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
