use std::sync::Arc;

use takeaway_core::{DomainError, DomainResult, Money, OrderId};
use takeaway_menu::{Dish, MenuCatalog};

/// One basket line: a dish and how many of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketEntry {
    dish: Dish,
    quantity: u32,
}

impl BasketEntry {
    pub fn dish(&self) -> &Dish {
        &self.dish
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity` for this line.
    pub fn subtotal(&self) -> Money {
        self.dish.price().times(self.quantity)
    }
}

/// A customer's order: an ordered basket, optionally bound to the restaurant
/// its dishes are resolved against.
///
/// The total is always derived from the basket, never stored.
#[derive(Clone)]
pub struct Order {
    id: OrderId,
    restaurant: Option<Arc<dyn MenuCatalog>>,
    basket: Vec<BasketEntry>,
}

impl Order {
    /// An empty order not bound to any restaurant.
    pub fn new() -> Self {
        Self {
            id: OrderId::new(),
            restaurant: None,
            basket: Vec::new(),
        }
    }

    /// An empty order whose items are resolved against `restaurant`.
    pub fn for_restaurant(restaurant: Arc<dyn MenuCatalog>) -> Self {
        Self {
            restaurant: Some(restaurant),
            ..Self::new()
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn restaurant(&self) -> Option<&Arc<dyn MenuCatalog>> {
        self.restaurant.as_ref()
    }

    /// Add `quantity` of the dish called `dish_name`, looked up in the bound
    /// restaurant.
    pub fn add_item(&mut self, dish_name: &str, quantity: u32) -> DomainResult<()> {
        ensure_positive(quantity)?;
        let restaurant = self
            .restaurant
            .as_ref()
            .ok_or_else(|| DomainError::validation("order is not bound to a restaurant"))?;
        let dish = restaurant.find_dish(dish_name)?.clone();
        self.basket.push(BasketEntry { dish, quantity });
        Ok(())
    }

    /// Add `quantity` of a caller-supplied dish as-is.
    ///
    /// No catalog lookup happens here; the dish is checked against the
    /// restaurant when the order is placed.
    pub fn add_dish(&mut self, dish: Dish, quantity: u32) -> DomainResult<()> {
        ensure_positive(quantity)?;
        self.basket.push(BasketEntry { dish, quantity });
        Ok(())
    }

    pub fn basket(&self) -> &[BasketEntry] {
        &self.basket
    }

    pub fn is_empty(&self) -> bool {
        self.basket.is_empty()
    }

    /// Total number of portions across all lines.
    pub fn item_count(&self) -> u64 {
        self.basket.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Σ(price × quantity) over the basket, as the order itself sees it.
    pub fn total(&self) -> Money {
        self.basket.iter().map(BasketEntry::subtotal).sum()
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("bound", &self.restaurant.is_some())
            .field("basket", &self.basket)
            .finish()
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for entry in &self.basket {
            writeln!(
                f,
                "{} x {} @ {}",
                entry.quantity,
                entry.dish.name(),
                entry.dish.price()
            )?;
        }
        write!(f, "Total: {}", self.total())
    }
}

fn ensure_positive(quantity: u32) -> DomainResult<()> {
    if quantity == 0 {
        return Err(DomainError::InvalidQuantity(quantity));
    }
    Ok(())
}
