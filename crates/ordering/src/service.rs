//! The takeaway ordering service: menu display, order creation and placement.

use std::io::{self, Write};
use std::sync::Arc;

use chrono::NaiveDateTime;

use takeaway_core::{DomainError, Money, OrderId};
use takeaway_menu::MenuCatalog;

use crate::clock::{Clock, SystemClock};
use crate::delivery::DeliveryPolicy;
use crate::error::PlaceOrderError;
use crate::notification::NotificationChannel;
use crate::order::Order;

/// Outcome of a successfully placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub destination: String,
    pub total: Money,
    pub estimated_delivery: NaiveDateTime,
    pub message: String,
}

/// Orchestrates ordering against one restaurant.
///
/// All checks in [`OrderingService::place_order`] run before the single
/// outbound notification, so a rejected order never produces a message.
pub struct OrderingService {
    channel: Arc<dyn NotificationChannel>,
    restaurant: Arc<dyn MenuCatalog>,
    clock: Arc<dyn Clock>,
    delivery: DeliveryPolicy,
}

impl OrderingService {
    pub fn new(channel: Arc<dyn NotificationChannel>, restaurant: Arc<dyn MenuCatalog>) -> Self {
        Self {
            channel,
            restaurant,
            clock: Arc::new(SystemClock),
            delivery: DeliveryPolicy::default(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_delivery_policy(mut self, delivery: DeliveryPolicy) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn restaurant(&self) -> &Arc<dyn MenuCatalog> {
        &self.restaurant
    }

    pub fn channel(&self) -> &Arc<dyn NotificationChannel> {
        &self.channel
    }

    /// Print the restaurant's menu to stdout.
    pub fn print_menu(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_menu(&mut out)
    }

    /// Write the restaurant's menu followed by one newline to `out`.
    pub fn write_menu<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.restaurant.format_menu())
    }

    /// Return `order` untouched, or a fresh order bound to this restaurant.
    pub fn create_order(&self, order: Option<Order>) -> Order {
        order.unwrap_or_else(|| Order::for_restaurant(Arc::clone(&self.restaurant)))
    }

    /// Verify `order` against the catalog and send the confirmation to
    /// `destination`.
    pub fn place_order(
        &self,
        order: Order,
        destination: &str,
    ) -> Result<PlacedOrder, PlaceOrderError> {
        let computed = self.authoritative_total(&order)?;
        let declared = order.total();
        if declared != computed {
            return Err(DomainError::total_mismatch(declared, computed).into());
        }
        tracing::debug!(order_id = %order.id(), total = %computed, "order total verified");

        let estimated_delivery = self.delivery.estimate(self.clock.now())?;
        let message = confirmation_message(&self.delivery.format(estimated_delivery));

        self.channel.send_message(destination, &message)?;
        tracing::info!(
            order_id = %order.id(),
            items = order.item_count(),
            total = %computed,
            eta = %estimated_delivery,
            "order placed and confirmation sent"
        );

        Ok(PlacedOrder {
            order_id: order.id(),
            destination: destination.to_string(),
            total: computed,
            estimated_delivery,
            message,
        })
    }

    /// Re-price every basket line from the catalog, ignoring the price carried
    /// by the dish on the line.
    fn authoritative_total(&self, order: &Order) -> Result<Money, DomainError> {
        order
            .basket()
            .iter()
            .map(|entry| {
                self.restaurant
                    .find_dish(entry.dish().name())
                    .map(|dish| dish.price().times(entry.quantity()))
            })
            .sum()
    }
}

fn confirmation_message(estimated_time: &str) -> String {
    format!("Thank you! Your order was placed and will be delivered before {estimated_time}")
}
