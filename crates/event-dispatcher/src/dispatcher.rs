//! Event dispatcher registry.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{DispatchError, HandlerFailure, Result, UnknownPolicy};
use crate::event::{DomainEvent, EventPayload};
use crate::handler::EventHandler;

type HandlerList<P> = Vec<Arc<dyn EventHandler<P>>>;

/// What `notify` does when a handler returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failing handler and return its error.
    #[default]
    FailFast,

    /// Run every handler and report all failures together.
    ContinueOnError,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::FailFast => "fail-fast",
            FailurePolicy::ContinueOnError => "continue",
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-fast" | "failfast" | "fail_fast" => Ok(FailurePolicy::FailFast),
            "continue" | "continue-on-error" | "continue_on_error" => {
                Ok(FailurePolicy::ContinueOnError)
            }
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

/// Maps event names to ordered handler lists and notifies them synchronously.
///
/// The dispatcher:
/// - keeps handlers in registration order, duplicates included
/// - invokes every handler for an event before `notify` returns
/// - treats unknown names as empty lists (no error)
///
/// Registration goes through `&self` so a single dispatcher can be shared
/// by reference, including from a `static`.
pub struct EventDispatcher<P> {
    handlers: RwLock<HashMap<String, HandlerList<P>>>,
    policy: FailurePolicy,
}

impl<P: EventPayload + 'static> EventDispatcher<P> {
    /// Creates an empty dispatcher with the fail-fast policy.
    pub fn new() -> Self {
        Self::with_policy(FailurePolicy::default())
    }

    /// Creates an empty dispatcher with the given failure policy.
    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            policy,
        }
    }

    /// Returns the failure policy.
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Appends a handler to the list for `event_name`.
    pub fn register(&self, event_name: impl Into<String>, handler: Arc<dyn EventHandler<P>>) {
        let event_name = event_name.into();
        tracing::debug!(event_name = %event_name, handler = handler.name(), "registering handler");

        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        handlers.entry(event_name).or_default().push(handler);
    }

    /// Removes the first registration of `handler` under `event_name`.
    ///
    /// Handlers are matched by identity (the same `Arc` allocation). Unknown
    /// names or handlers are ignored.
    pub fn unregister<H>(&self, event_name: &str, handler: &Arc<H>)
    where
        H: EventHandler<P> + ?Sized,
    {
        let target = Arc::as_ptr(handler).cast::<()>();
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);

        let Some(list) = handlers.get_mut(event_name) else {
            return;
        };

        if let Some(index) = list
            .iter()
            .position(|registered| Arc::as_ptr(registered).cast::<()>() == target)
        {
            list.remove(index);
            tracing::debug!(event_name, "unregistered handler");
        }

        if list.is_empty() {
            handlers.remove(event_name);
        }
    }

    /// Removes every registration.
    pub fn unregister_all(&self) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        tracing::debug!("unregistered all handlers");
    }

    /// Returns the number of handlers registered under `event_name`.
    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_name)
            .map_or(0, Vec::len)
    }

    /// Returns true if at least one handler is registered under `event_name`.
    pub fn has_handlers(&self, event_name: &str) -> bool {
        self.handler_count(event_name) > 0
    }

    /// Returns the event names that currently have handlers, sorted.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Invokes every handler registered for the event's name, in order.
    ///
    /// The handler list is copied before invocation, so handlers may register
    /// or unregister; changes apply to the next notification.
    #[tracing::instrument(skip(self, event), fields(event_name = event.name(), event_id = %event.event_id()))]
    pub fn notify(&self, event: &DomainEvent<P>) -> Result<()> {
        let event_name = event.name();
        let handlers = self.snapshot(event_name);

        if handlers.is_empty() {
            tracing::trace!("no handlers registered");
            return Ok(());
        }

        metrics::counter!("domain_events_dispatched_total", "event" => event_name).increment(1);

        let mut failures = Vec::new();
        for handler in &handlers {
            tracing::debug!(handler = handler.name(), "invoking handler");

            let Err(error) = handler.handle(event) else {
                continue;
            };

            metrics::counter!("domain_event_handler_failures_total", "event" => event_name)
                .increment(1);
            tracing::warn!(handler = handler.name(), %error, "event handler failed");

            match self.policy {
                FailurePolicy::FailFast => {
                    return Err(DispatchError::HandlerFailed {
                        event_name,
                        handler: handler.name(),
                        source: error,
                    });
                }
                FailurePolicy::ContinueOnError => failures.push(HandlerFailure {
                    handler: handler.name(),
                    error,
                }),
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::HandlersFailed {
                event_name,
                failures,
            })
        }
    }

    fn snapshot(&self, event_name: &str) -> HandlerList<P> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_name)
            .cloned()
            .unwrap_or_default()
    }
}

impl<P: EventPayload + 'static> Default for EventDispatcher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> std::fmt::Debug for EventDispatcher<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handlers = self.handlers.read().unwrap_or_else(PoisonError::into_inner);
        let counts: HashMap<&str, usize> = handlers
            .iter()
            .map(|(name, list)| (name.as_str(), list.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("handlers", &counts)
            .field("policy", &self.policy)
            .finish()
    }
}
