use std::sync::Arc;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use domain::{
    ADDRESS_CHANGED, Address, CUSTOMER_CREATED, Console, Customer, CustomerFactory,
    LogAddressChanged, LogCustomerCreatedFirst, LogCustomerCreatedSecond, Money, Order,
    OrderItem, OrderService, Product, ProductService, ShopDispatcher,
};

fn items(count: u32) -> Vec<OrderItem> {
    (0..count)
        .map(|n| {
            OrderItem::new(
                format!("i{n}"),
                format!("Item {n}"),
                Money::from_cents(1_000 + i64::from(n)),
                format!("p{n}"),
                n + 1,
            )
        })
        .collect()
}

fn wired_dispatcher() -> (ShopDispatcher, Console) {
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
    dispatcher.register(
        ADDRESS_CHANGED,
        Arc::new(LogAddressChanged::new(console.clone())),
    );
    (dispatcher, console)
}

fn bench_place_order(c: &mut Criterion) {
    c.bench_function("domain/place_order_10_items", |b| {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        b.iter(|| OrderService::place_order(&mut customer, items(10)).unwrap());
    });
}

fn bench_order_total(c: &mut Criterion) {
    let orders: Vec<Order> = (0..100)
        .map(|n| Order::new(format!("o{n}"), "c1", items(5)).unwrap())
        .collect();

    c.bench_function("domain/total_100_orders", |b| {
        b.iter(|| OrderService::total(&orders));
    });
}

fn bench_customer_factory(c: &mut Criterion) {
    let (dispatcher, console) = wired_dispatcher();

    c.bench_function("domain/create_customer_with_handlers", |b| {
        b.iter_batched(
            || console.clear(),
            |()| CustomerFactory::create_via("Customer", &dispatcher).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_change_address(c: &mut Criterion) {
    let (dispatcher, console) = wired_dispatcher();
    let mut customer = Customer::new("c1", "Customer 1").unwrap();
    let address = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();

    c.bench_function("domain/change_address_with_handler", |b| {
        b.iter_batched(
            || console.clear(),
            |()| {
                customer
                    .change_address_via(address.clone(), &dispatcher)
                    .unwrap()
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_increase_price(c: &mut Criterion) {
    let catalogue: Vec<Product> = (0..1_000)
        .map(|n| {
            Product::new(format!("p{n}"), format!("Product {n}"), Money::from_cents(999)).unwrap()
        })
        .collect();

    c.bench_function("domain/increase_price_1000_products", |b| {
        b.iter_batched(
            || catalogue.clone(),
            |mut products| ProductService::increase_price(&mut products, 10).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_place_order,
    bench_order_total,
    bench_customer_factory,
    bench_change_address,
    bench_increase_price
);
criterion_main!(benches);
