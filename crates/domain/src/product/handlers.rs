use event_dispatcher::{DomainEvent, EventHandler, EventPayload, HandlerError};

use crate::console::Console;
use crate::events::ShopEvent;

/// Announces new products by "email" (a console line).
#[derive(Debug, Clone, Default)]
pub struct SendEmailWhenProductIsCreated {
    console: Console,
}

impl SendEmailWhenProductIsCreated {
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl EventHandler<ShopEvent> for SendEmailWhenProductIsCreated {
    fn name(&self) -> &'static str {
        "SendEmailWhenProductIsCreated"
    }

    fn handle(&self, event: &DomainEvent<ShopEvent>) -> Result<(), HandlerError> {
        let ShopEvent::ProductCreated(data) = event.payload() else {
            return Err(HandlerError::UnexpectedEvent {
                handler: self.name(),
                event_name: event.payload().event_name(),
            });
        };

        let line = format!(
            "Sending email about new product: {} ({})",
            data.product.name(),
            data.product.price()
        );
        tracing::info!(target: "storefront::handlers", product_id = %data.product.id(), "{line}");
        self.console
            .write_line(&line)
            .map_err(|e| HandlerError::failed(e.to_string()))
    }
}
