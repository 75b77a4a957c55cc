//! Order domain service.

use common::EntityId;

use crate::customer::Customer;
use crate::error::Result;
use crate::money::Money;

use super::{Order, OrderItem};

/// Operations on orders that involve more than one aggregate.
pub struct OrderService;

impl OrderService {
    /// Places an order for `customer` and credits reward points.
    ///
    /// The customer earns half the order total in whole currency units,
    /// rounded down.
    #[tracing::instrument(skip(customer, items), fields(customer_id = %customer.id()))]
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order> {
        let order = Order::new(EntityId::generate(), customer.id().clone(), items)?;

        let points = Self::reward_points_for(order.total());
        customer.add_reward_points(points);

        metrics::counter!("orders_placed_total").increment(1);
        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            reward_points = points,
            "order placed"
        );

        Ok(order)
    }

    /// Returns the sum of the given orders' totals.
    pub fn total(orders: &[Order]) -> Money {
        orders.iter().map(Order::total).sum()
    }

    /// Reward points earned for an order total.
    pub fn reward_points_for(total: Money) -> u64 {
        u64::try_from(total.cents() / 200).unwrap_or(0)
    }
}
