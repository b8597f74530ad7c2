//! # Reports
//!
//! Read-only queries over record snapshots. Every function here takes the
//! snapshots it needs by reference and returns freshly built rows; nothing
//! is cached between calls.
//!
//! ## Report Families
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Report Families                                 │
//! │                                                                         │
//! │  this module         menu filters (available, removed, sold out)       │
//! │                      order listings (chronological, in progress,       │
//! │                      by email), order pricing, receipts                │
//! │                                                                         │
//! │  popularity          top-N pizzas / drinks, crust / pizza size /       │
//! │                      drink size rankings, average size per crust       │
//! │                                                                         │
//! │  spending            orders above a price, customer spending ranking,  │
//! │                      revenue summary                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Joins
//! Orders reference pizzas and drinks by id. A reference that is missing
//! from the snapshot contributes a zero price and no name; it never fails a
//! report.

pub mod popularity;
pub mod spending;

pub use popularity::*;
pub use spending::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::records::RecordSet;
use crate::types::{Drink, DrinkSize, MenuItem, Order, OrderStatus, Pizza, PizzaSize};

// =============================================================================
// Menu Filters
// =============================================================================

/// Items on sale: neither sold out nor removed, in stored order.
pub fn available<T: MenuItem>(items: &RecordSet<T>) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.is_available())
        .cloned()
        .collect()
}

/// Soft-deleted items, in stored order.
pub fn removed<T: MenuItem>(items: &RecordSet<T>) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.is_soft_deleted())
        .cloned()
        .collect()
}

/// Sold-out items, in stored order. Removed items that are also flagged
/// sold out are included.
pub fn sold_out<T: MenuItem>(items: &RecordSet<T>) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.is_sold_out())
        .cloned()
        .collect()
}

// =============================================================================
// Order Listings
// =============================================================================

/// Orders sorted by date, oldest first. Same-day orders keep stored order.
pub fn chronological(orders: &[Order]) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by_key(|order| order.order_date);
    sorted
}

/// Orders not yet complete, in stored order.
pub fn in_progress(orders: &[Order]) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| !order.status.is_complete())
        .cloned()
        .collect()
}

/// Orders placed by `email` (case-insensitive exact match), in stored order.
pub fn by_email(orders: &[Order], email: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.placed_by(email))
        .cloned()
        .collect()
}

// =============================================================================
// Pricing
// =============================================================================

/// Pizza price plus drink price (zero when no drink was ordered).
pub fn order_total(order: &Order, pizzas: &RecordSet<Pizza>, drinks: &RecordSet<Drink>) -> Money {
    let pizza_price = pizzas
        .get(order.pizza_id)
        .map(|pizza| pizza.price)
        .unwrap_or_default();

    let drink_price = order
        .drink_id()
        .and_then(|id| drinks.get(id))
        .map(|drink| drink.price)
        .unwrap_or_default();

    pizza_price + drink_price
}

/// An order with its names resolved and its total computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub order_id: u32,
    pub customer_email: String,
    pub order_date: NaiveDate,
    /// `None` if the pizza is missing from the snapshot.
    pub pizza_name: Option<String>,
    pub pizza_size: PizzaSize,
    pub drink_name: Option<String>,
    pub drink_size: Option<DrinkSize>,
    pub status: OrderStatus,
    pub total: Money,
}

/// Every order joined with its pizza and drink, in stored order.
pub fn receipts(
    orders: &[Order],
    pizzas: &RecordSet<Pizza>,
    drinks: &RecordSet<Drink>,
) -> Vec<Receipt> {
    orders
        .iter()
        .map(|order| Receipt {
            order_id: order.id,
            customer_email: order.customer_email.clone(),
            order_date: order.order_date,
            pizza_name: pizzas.get(order.pizza_id).map(|pizza| pizza.name.clone()),
            pizza_size: order.pizza_size,
            drink_name: order
                .drink_id()
                .and_then(|id| drinks.get(id))
                .map(|drink| drink.name.clone()),
            drink_size: order.drink_size(),
            status: order.status,
            total: order_total(order, pizzas, drinks),
        })
        .collect()
}

// =============================================================================
// Test Fixtures
// =============================================================================


// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::types::CrustType;

    #[test]
    fn test_available_excludes_sold_out_and_removed() {
        let mut sold = pizza(2, CrustType::Thin, 900);
        sold.is_sold_out = true;
        let mut gone = pizza(3, CrustType::Thin, 900);
        gone.soft_deleted = true;

        let pizzas =
            RecordSet::from_records(vec![pizza(1, CrustType::Thin, 900), sold, gone]).unwrap();

        let ids: Vec<u32> = available(&pizzas).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(removed(&pizzas).len(), 1);
        assert_eq!(removed(&pizzas)[0].id, 3);
        assert_eq!(sold_out(&pizzas)[0].id, 2);
    }

    #[test]
    fn test_chronological_is_stable() {
        let orders = vec![
            on(order(1, "a@x.com", 1), 2024, 3, 2),
            on(order(2, "a@x.com", 1), 2023, 12, 31),
            on(order(3, "a@x.com", 1), 2024, 3, 2),
            on(order(4, "a@x.com", 1), 2024, 1, 15),
        ];

        let ids: Vec<u32> = chronological(&orders).iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_in_progress_and_by_email() {
        let mut done = order(2, "b@x.com", 1);
        done.status = OrderStatus::Complete;
        let orders = vec![order(1, "A@X.com", 1), done, order(3, "a@x.com", 1)];

        let open: Vec<u32> = in_progress(&orders).iter().map(|o| o.id).collect();
        assert_eq!(open, vec![1, 3]);

        let mine: Vec<u32> = by_email(&orders, "a@x.COM").iter().map(|o| o.id).collect();
        assert_eq!(mine, vec![1, 3]);
        assert!(by_email(&orders, "c@x.com").is_empty());
    }

    #[test]
    fn test_order_total_joins_prices() {
        let pizzas = RecordSet::from_records(vec![pizza(1, CrustType::Thin, 1000)]).unwrap();
        let drinks = RecordSet::from_records(vec![drink(1, 250)]).unwrap();

        let plain = order(1, "a@x.com", 1);
        assert_eq!(order_total(&plain, &pizzas, &drinks).cents(), 1000);

        let combo = with_drink(order(2, "a@x.com", 1), 1, DrinkSize::Large);
        assert_eq!(order_total(&combo, &pizzas, &drinks).cents(), 1250);

        let dangling = with_drink(order(3, "a@x.com", 9), 9, DrinkSize::Small);
        assert!(order_total(&dangling, &pizzas, &drinks).is_zero());
    }

    #[test]
    fn test_receipts_resolve_names() {
        let pizzas = RecordSet::from_records(vec![pizza(1, CrustType::Thin, 1000)]).unwrap();
        let drinks = RecordSet::from_records(vec![drink(1, 250)]).unwrap();
        let orders = vec![
            with_drink(order(1, "a@x.com", 1), 1, DrinkSize::Medium),
            order(2, "b@x.com", 5),
        ];

        let rows = receipts(&orders, &pizzas, &drinks);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pizza_name.as_deref(), Some("Pizza 1"));
        assert_eq!(rows[0].drink_name.as_deref(), Some("Drink 1"));
        assert_eq!(rows[0].drink_size, Some(DrinkSize::Medium));
        assert_eq!(rows[0].total.cents(), 1250);
        assert_eq!(rows[1].pizza_name, None);
        assert_eq!(rows[1].drink_name, None);
        assert!(rows[1].total.is_zero());
    }
}
