//! Log handlers reacting to customer events.

use event_dispatcher::{DomainEvent, EventHandler, EventPayload, HandlerError};

use crate::console::Console;
use crate::events::ShopEvent;

fn unexpected(handler: &'static str, event: &DomainEvent<ShopEvent>) -> HandlerError {
    HandlerError::UnexpectedEvent {
        handler,
        event_name: event.payload().event_name(),
    }
}

fn write(console: &Console, line: &str) -> Result<(), HandlerError> {
    tracing::info!(target: "storefront::handlers", "{line}");
    console
        .write_line(line)
        .map_err(|e| HandlerError::failed(e.to_string()))
}

/// First log line on customer creation.
#[derive(Debug, Clone, Default)]
pub struct LogCustomerCreatedFirst {
    console: Console,
}

impl LogCustomerCreatedFirst {
    pub const MESSAGE: &'static str = "This is the first console.log of event: CustomerCreated";

    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl EventHandler<ShopEvent> for LogCustomerCreatedFirst {
    fn name(&self) -> &'static str {
        "LogCustomerCreatedFirst"
    }

    fn handle(&self, event: &DomainEvent<ShopEvent>) -> Result<(), HandlerError> {
        match event.payload() {
            ShopEvent::CustomerCreated(_) => write(&self.console, Self::MESSAGE),
            _ => Err(unexpected(self.name(), event)),
        }
    }
}

/// Second log line on customer creation.
#[derive(Debug, Clone, Default)]
pub struct LogCustomerCreatedSecond {
    console: Console,
}

impl LogCustomerCreatedSecond {
    pub const MESSAGE: &'static str = "This is the second console.log of event: CustomerCreated";

    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl EventHandler<ShopEvent> for LogCustomerCreatedSecond {
    fn name(&self) -> &'static str {
        "LogCustomerCreatedSecond"
    }

    fn handle(&self, event: &DomainEvent<ShopEvent>) -> Result<(), HandlerError> {
        match event.payload() {
            ShopEvent::CustomerCreated(_) => write(&self.console, Self::MESSAGE),
            _ => Err(unexpected(self.name(), event)),
        }
    }
}

/// Logs the customer's new address.
#[derive(Debug, Clone, Default)]
pub struct LogAddressChanged {
    console: Console,
}

impl LogAddressChanged {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl EventHandler<ShopEvent> for LogAddressChanged {
    fn name(&self) -> &'static str {
        "LogAddressChanged"
    }

    fn handle(&self, event: &DomainEvent<ShopEvent>) -> Result<(), HandlerError> {
        let ShopEvent::AddressChanged(data) = event.payload() else {
            return Err(unexpected(self.name(), event));
        };
        let line = format!(
            "Customer address: {}, {} changed to: {}",
            data.customer_id, data.name, data.address
        );
        write(&self.console, &line)
    }
}
