//! End-to-end storefront walkthrough.
//!
//! Registers the sample handlers, creates a product catalogue and a customer,
//! places an order and moves it through its lifecycle, persisting every step.

use std::sync::Arc;

use common::EntityId;
use domain::{
    ADDRESS_CHANGED, Address, CUSTOMER_CREATED, Console, CustomerFactory, LogAddressChanged,
    LogCustomerCreatedFirst, LogCustomerCreatedSecond, Money, OrderItem, OrderService,
    OrderStatus, PRODUCT_CREATED, ProductFactory, Repository, Result,
    SendEmailWhenProductIsCreated, ShopDispatcher,
};
use infrastructure::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};

/// Storage used by the walkthrough.
#[derive(Clone, Default)]
pub struct Repositories {
    pub customers: InMemoryCustomerRepository,
    pub products: InMemoryProductRepository,
    pub orders: InMemoryOrderRepository,
}

/// What the walkthrough produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub customer_id: EntityId,
    pub order_id: EntityId,
    pub total: Money,
    pub reward_points: u64,
    pub status: OrderStatus,
}

/// Registers the sample handlers on `dispatcher`, writing to `console`.
pub fn register_handlers(dispatcher: &ShopDispatcher, console: &Console) {
    dispatcher.register(
        CUSTOMER_CREATED,
        Arc::new(LogCustomerCreatedFirst::new(console.clone())),
    );
    dispatcher.register(
        CUSTOMER_CREATED,
        Arc::new(LogCustomerCreatedSecond::new(console.clone())),
    );
    dispatcher.register(
        ADDRESS_CHANGED,
        Arc::new(LogAddressChanged::new(console.clone())),
    );
    dispatcher.register(
        PRODUCT_CREATED,
        Arc::new(SendEmailWhenProductIsCreated::new(console.clone())),
    );
}

/// Runs the walkthrough against `dispatcher` and `repositories`.
#[tracing::instrument(skip_all)]
pub async fn run(
    dispatcher: &ShopDispatcher,
    console: &Console,
    repositories: &Repositories,
) -> Result<Summary> {
    register_handlers(dispatcher, console);

    let notebook = ProductFactory::create_via("Notebook", Money::from_cents(2_500), dispatcher)?;
    let pen = ProductFactory::create_via("Pen", Money::from_cents(350), dispatcher)?;
    repositories.products.create(&notebook).await?;
    repositories.products.create(&pen).await?;

    let mut customer = CustomerFactory::create_via("Juan", dispatcher)?;
    repositories.customers.create(&customer).await?;

    let address = Address::new("Rua das Flores", 123, "35160-000", "Ipatinga")?;
    customer.change_address_via(address, dispatcher)?;
    customer.activate()?;
    repositories.customers.update(&customer).await?;

    let items = vec![
        OrderItem::new(
            EntityId::generate(),
            notebook.name(),
            notebook.price(),
            notebook.id(),
            2,
        ),
        OrderItem::new(EntityId::generate(), pen.name(), pen.price(), pen.id(), 3),
    ];
    let mut order = OrderService::place_order(&mut customer, items)?;
    repositories.orders.create(&order).await?;
    repositories.customers.update(&customer).await?;

    order.approve()?;
    repositories.orders.update(&order).await?;
    order.ship()?;
    repositories.orders.update(&order).await?;

    let stored = repositories.orders.find(order.id()).await?;
    tracing::info!(
        order_id = %stored.id(),
        status = %stored.status(),
        total = %stored.total(),
        "order stored"
    );

    let customer = repositories.customers.find(customer.id()).await?;
    Ok(Summary {
        customer_id: customer.id().clone(),
        order_id: stored.id().clone(),
        total: stored.total(),
        reward_points: customer.reward_points(),
        status: stored.status(),
    })
}
