//! Integration tests for customer events.
//!
//! These tests drive the aggregates and factories through the public API and
//! observe the handlers' console output. Tests touching the shared dispatcher
//! run serially and reset it before use.

use std::sync::Arc;

use domain::{
    ADDRESS_CHANGED, Address, CUSTOMER_CREATED, Console, Customer, CustomerFactory, DomainError,
    LogAddressChanged, LogCustomerCreatedFirst, LogCustomerCreatedSecond, PRODUCT_CREATED, Money,
    ProductFactory, SendEmailWhenProductIsCreated, ShopDispatcher, ShopEvent, shared_dispatcher,
};
use event_dispatcher::{DispatchError, DomainEvent, EventHandler, FailurePolicy, HandlerError};
use serial_test::serial;

fn ipatinga() -> Address {
    Address::new("R Flores", 123, "90999-909", "Ipatinga").unwrap()
}

/// Always fails; used to exercise dispatch failure handling.
struct Broken;

impl EventHandler<ShopEvent> for Broken {
    fn name(&self) -> &'static str {
        "Broken"
    }

    fn handle(&self, _event: &DomainEvent<ShopEvent>) -> Result<(), HandlerError> {
        Err(HandlerError::failed("mail server down"))
    }
}

mod explicit_dispatcher {
    use super::*;

    #[test]
    fn customer_created_runs_both_log_handlers_in_order() {
        let dispatcher = ShopDispatcher::new();
        let console = Console::capture();
        dispatcher.register(
            CUSTOMER_CREATED,
            Arc::new(LogCustomerCreatedFirst::new(console.clone())),
        );
        dispatcher.register(
            CUSTOMER_CREATED,
            Arc::new(LogCustomerCreatedSecond::new(console.clone())),
        );

        let customer = Customer::new("c1", "Customer 1").unwrap();
        dispatcher
            .notify(&ShopEvent::customer_created(&customer))
            .unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "This is the first console.log of event: CustomerCreated",
                "This is the second console.log of event: CustomerCreated",
            ]
        );
    }

    #[test]
    fn address_change_logs_id_name_and_address() {
        let dispatcher = ShopDispatcher::new();
        let console = Console::capture();
        dispatcher.register(
            ADDRESS_CHANGED,
            Arc::new(LogAddressChanged::new(console.clone())),
        );

        let mut customer = Customer::new("c1", "Juan").unwrap();
        customer.change_address_via(ipatinga(), &dispatcher).unwrap();

        let lines = console.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("c1"));
        assert!(lines[0].contains("Juan"));
        assert!(lines[0].contains(&ipatinga().to_string()));
    }

    #[test]
    fn unregister_all_silences_every_handler() {
        let dispatcher = ShopDispatcher::new();
        let console = Console::capture();
        dispatcher.register(
            CUSTOMER_CREATED,
            Arc::new(LogCustomerCreatedFirst::new(console.clone())),
        );
        dispatcher.register(
            ADDRESS_CHANGED,
            Arc::new(LogAddressChanged::new(console.clone())),
        );

        dispatcher.unregister_all();
        let mut customer = CustomerFactory::create_via("Juan", &dispatcher).unwrap();
        customer.change_address_via(ipatinga(), &dispatcher).unwrap();

        assert!(console.lines().is_empty());
    }

    #[test]
    fn failing_handler_keeps_address_change_and_reports_error() {
        let dispatcher = ShopDispatcher::new();
        dispatcher.register(ADDRESS_CHANGED, Arc::new(Broken));

        let mut customer = Customer::new("c1", "Juan").unwrap();
        let result = customer.change_address_via(ipatinga(), &dispatcher);

        assert!(matches!(
            result,
            Err(DomainError::Dispatch(DispatchError::HandlerFailed {
                handler: "Broken",
                ..
            }))
        ));
        assert_eq!(customer.address(), Some(&ipatinga()));
    }

    #[test]
    fn continue_policy_still_runs_later_handlers() {
        let dispatcher = ShopDispatcher::with_policy(FailurePolicy::ContinueOnError);
        let console = Console::capture();
        dispatcher.register(PRODUCT_CREATED, Arc::new(Broken));
        dispatcher.register(
            PRODUCT_CREATED,
            Arc::new(SendEmailWhenProductIsCreated::new(console.clone())),
        );

        let result = ProductFactory::create_via("Lamp", Money::from_dollars(30), &dispatcher);

        assert!(matches!(
            result,
            Err(DomainError::Dispatch(DispatchError::HandlersFailed { .. }))
        ));
        assert_eq!(
            console.lines(),
            vec!["Sending email about new product: Lamp ($30.00)"]
        );
    }
}

mod shared_dispatcher_scenarios {
    use super::*;

    fn registered_elsewhere(console: &Console) {
        shared_dispatcher().register(
            CUSTOMER_CREATED,
            Arc::new(LogCustomerCreatedFirst::new(console.clone())),
        );
    }

    #[test]
    #[serial]
    fn shared_instance_state_is_visible_from_every_call_site() {
        shared_dispatcher().unregister_all();
        let console = Console::capture();

        registered_elsewhere(&console);

        assert_eq!(shared_dispatcher().handler_count(CUSTOMER_CREATED), 1);
        shared_dispatcher().unregister_all();
    }

    #[test]
    #[serial]
    fn factory_notifies_shared_dispatcher_without_wiring() {
        shared_dispatcher().unregister_all();
        let console = Console::capture();
        registered_elsewhere(&console);

        let customer = CustomerFactory::create("Juan").unwrap();

        assert_eq!(customer.name(), "Juan");
        assert_eq!(console.lines(), vec![LogCustomerCreatedFirst::MESSAGE]);
        shared_dispatcher().unregister_all();
    }

    #[test]
    #[serial]
    fn change_address_notifies_shared_dispatcher() {
        shared_dispatcher().unregister_all();
        let console = Console::capture();
        shared_dispatcher().register(
            ADDRESS_CHANGED,
            Arc::new(LogAddressChanged::new(console.clone())),
        );

        let mut customer = Customer::new("c1", "Juan").unwrap();
        customer.change_address(ipatinga()).unwrap();

        assert_eq!(
            console.lines(),
            vec!["Customer address: c1, Juan changed to: R Flores, 123, 90999-909 Ipatinga"]
        );
        shared_dispatcher().unregister_all();
    }

    #[test]
    #[serial]
    fn product_factory_uses_shared_dispatcher() {
        shared_dispatcher().unregister_all();
        let console = Console::capture();
        shared_dispatcher().register(
            PRODUCT_CREATED,
            Arc::new(SendEmailWhenProductIsCreated::new(console.clone())),
        );

        ProductFactory::create("Desk", Money::from_cents(12_500)).unwrap();

        assert_eq!(
            console.lines(),
            vec!["Sending email about new product: Desk ($125.00)"]
        );
        shared_dispatcher().unregister_all();
    }

    #[test]
    #[serial]
    fn create_with_address_does_not_raise_address_changed() {
        shared_dispatcher().unregister_all();
        let console = Console::capture();
        shared_dispatcher().register(
            ADDRESS_CHANGED,
            Arc::new(LogAddressChanged::new(console.clone())),
        );

        let customer = CustomerFactory::create_with_address("Juan", ipatinga()).unwrap();

        assert_eq!(customer.address(), Some(&ipatinga()));
        assert!(console.lines().is_empty());
        shared_dispatcher().unregister_all();
    }
}
