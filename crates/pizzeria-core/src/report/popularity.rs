//! # Popularity Reports
//!
//! Counting reports: which pizzas and drinks sell, which crusts and sizes
//! people pick, and the average pizza size per crust.
//!
//! ## Counting
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  orders ──► count by id (HashMap<u32, usize>) ──► rank menu items      │
//! │                                                                         │
//! │  pizza ids in orders:  [1, 1, 2, 3, 3, 3]                               │
//! │  counts:               {1: 2, 2: 1, 3: 3}                               │
//! │  ranked (count desc, id asc):  #3 (3), #1 (2), #2 (1), #4 (0) ...       │
//! │  top_pizzas(2):        #3, #1                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Counts are kept in a map keyed by id, so ids need not be dense.
//! Every item in the menu snapshot is a candidate, including removed and
//! sold-out ones. References to ids the menu doesn't know are ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use crate::records::RecordSet;
use crate::types::{CrustType, Drink, DrinkSize, MenuItem, Order, Pizza, PizzaSize};

/// One ranked menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityEntry {
    pub id: u32,
    pub name: String,
    pub order_count: usize,
}

/// One ranked category (crust type, pizza size or drink size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount<C> {
    pub category: C,
    pub order_count: usize,
}

/// Average ordered pizza size for one crust type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrustSizeAverage {
    pub crust: CrustType,
    pub order_count: usize,
    /// Truncated average diameter in inches; `None` when no orders.
    pub average_inches: Option<u32>,
}

fn count_occurrences<K: Eq + Hash>(keys: impl Iterator<Item = K>) -> HashMap<K, usize> {
    let mut counts = HashMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Ranks every menu item by order count, ties by ascending id.
fn rank_items<T: MenuItem>(
    items: &RecordSet<T>,
    counts: &HashMap<u32, usize>,
    limit: usize,
) -> Vec<PopularityEntry> {
    let mut entries: Vec<PopularityEntry> = items
        .iter()
        .map(|item| PopularityEntry {
            id: item.id(),
            name: item.name().to_string(),
            order_count: counts.get(&item.id()).copied().unwrap_or(0),
        })
        .collect();

    entries.sort_by(|a, b| b.order_count.cmp(&a.order_count).then(a.id.cmp(&b.id)));
    entries.truncate(limit);
    entries
}

/// The `limit` most ordered pizzas. Returns `min(limit, menu size)` entries.
pub fn top_pizzas(
    orders: &[Order],
    pizzas: &RecordSet<Pizza>,
    limit: usize,
) -> Vec<PopularityEntry> {
    let counts = count_occurrences(orders.iter().map(|order| order.pizza_id));
    rank_items(pizzas, &counts, limit)
}

/// The `limit` most ordered drinks. Orders without a drink don't count.
pub fn top_drinks(
    orders: &[Order],
    drinks: &RecordSet<Drink>,
    limit: usize,
) -> Vec<PopularityEntry> {
    let counts = count_occurrences(orders.iter().filter_map(Order::drink_id));
    rank_items(drinks, &counts, limit)
}

/// Ranks all of `categories` by count, including zero counts.
///
/// The sort is stable, so equal counts stay in the canonical order given.
fn rank_categories<C: Copy + Eq + Hash>(
    categories: &[C],
    occurrences: impl Iterator<Item = C>,
) -> Vec<CategoryCount<C>> {
    let counts = count_occurrences(occurrences);

    let mut ranked: Vec<CategoryCount<C>> = categories
        .iter()
        .map(|&category| CategoryCount {
            category,
            order_count: counts.get(&category).copied().unwrap_or(0),
        })
        .collect();

    ranked.sort_by(|a, b| b.order_count.cmp(&a.order_count));
    ranked
}

/// Crust types ranked by how many orders used them.
pub fn crust_popularity(
    orders: &[Order],
    pizzas: &RecordSet<Pizza>,
) -> Vec<CategoryCount<CrustType>> {
    rank_categories(
        &CrustType::ALL,
        orders
            .iter()
            .filter_map(|order| pizzas.get(order.pizza_id))
            .map(|pizza| pizza.crust),
    )
}

/// Pizza sizes ranked by order count.
pub fn pizza_size_popularity(orders: &[Order]) -> Vec<CategoryCount<PizzaSize>> {
    rank_categories(&PizzaSize::ALL, orders.iter().map(|order| order.pizza_size))
}

/// Drink sizes ranked by order count. Orders without a drink don't count.
pub fn drink_size_popularity(orders: &[Order]) -> Vec<CategoryCount<DrinkSize>> {
    rank_categories(&DrinkSize::ALL, orders.iter().filter_map(Order::drink_size))
}

/// Average pizza diameter per crust type, one row per crust in canonical
/// order.
///
/// Orders whose pizza is missing from the snapshot are skipped.
pub fn average_size_by_crust(orders: &[Order], pizzas: &RecordSet<Pizza>) -> Vec<CrustSizeAverage> {
    let mut totals: HashMap<CrustType, (u32, usize)> = HashMap::new();

    for order in orders {
        if let Some(pizza) = pizzas.get(order.pizza_id) {
            let (inches, count) = totals.entry(pizza.crust).or_insert((0, 0));
            *inches += order.pizza_size.inches();
            *count += 1;
        }
    }

    CrustType::ALL
        .into_iter()
        .map(|crust| {
            let (inches, count) = totals.get(&crust).copied().unwrap_or((0, 0));
            CrustSizeAverage {
                crust,
                order_count: count,
                average_inches: (count > 0).then(|| inches / count as u32),
            }
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::*;

    fn pizza_menu() -> RecordSet<Pizza> {
        RecordSet::from_records(vec![
            pizza(1, CrustType::Thin, 1000),
            pizza(2, CrustType::Thick, 1100),
            pizza(3, CrustType::Stuffed, 1200),
            pizza(4, CrustType::Thick, 1300),
        ])
        .unwrap()
    }

    #[test]
    fn test_top_pizzas() {
        let orders: Vec<Order> = [1, 1, 2, 3, 3, 3]
            .into_iter()
            .enumerate()
            .map(|(i, pizza_id)| order(i as u32 + 1, "a@x.com", pizza_id))
            .collect();

        let top = top_pizzas(&orders, &pizza_menu(), 2);

        assert_eq!(top.len(), 2);
        assert_eq!((top[0].id, top[0].order_count), (3, 3));
        assert_eq!((top[1].id, top[1].order_count), (1, 2));
    }

    #[test]
    fn test_top_n_capped_by_menu_size_and_ties_by_id() {
        let orders = vec![order(1, "a@x.com", 4), order(2, "a@x.com", 2)];

        let top = top_pizzas(&orders, &pizza_menu(), 10);

        let ids: Vec<u32> = top.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
        assert_eq!(top[3].order_count, 0);
    }

    #[test]
    fn test_top_drinks_with_sparse_ids() {
        let drinks =
            RecordSet::from_records(vec![drink(1, 100), drink(5, 100), drink(9, 100)]).unwrap();
        let orders = vec![
            with_drink(order(1, "a@x.com", 1), 9, DrinkSize::Small),
            with_drink(order(2, "a@x.com", 1), 9, DrinkSize::Large),
            with_drink(order(3, "a@x.com", 1), 5, DrinkSize::Large),
            order(4, "a@x.com", 1),
            // Unknown drink: ignored
            with_drink(order(5, "a@x.com", 1), 42, DrinkSize::Large),
        ];

        let top = top_drinks(&orders, &drinks, 2);

        assert_eq!((top[0].id, top[0].order_count), (9, 2));
        assert_eq!((top[1].id, top[1].order_count), (5, 1));
    }

    #[test]
    fn test_category_rankings_include_zero_counts() {
        let orders = vec![
            order(1, "a@x.com", 2),
            order(2, "a@x.com", 4),
            order(3, "a@x.com", 1),
        ];

        let crusts = crust_popularity(&orders, &pizza_menu());
        assert_eq!(crusts.len(), 4);
        assert_eq!(crusts[0].category, CrustType::Thick);
        assert_eq!(crusts[0].order_count, 2);
        // Ties keep canonical order
        assert_eq!(crusts[1].category, CrustType::Thin);
        assert_eq!(crusts[2].category, CrustType::Stuffed);
        assert_eq!(crusts[3].category, CrustType::GlutenFree);
        assert_eq!(crusts[3].order_count, 0);
    }

    #[test]
    fn test_size_rankings() {
        let mut large = order(1, "a@x.com", 1);
        large.pizza_size = PizzaSize::Large;
        let orders = vec![
            large.clone(),
            large,
            with_drink(order(3, "a@x.com", 1), 1, DrinkSize::Medium),
        ];

        let sizes = pizza_size_popularity(&orders);
        assert_eq!(sizes[0].category, PizzaSize::Large);
        assert_eq!(sizes[0].order_count, 2);
        assert_eq!(sizes[1].category, PizzaSize::Medium);
        assert_eq!(sizes[2].order_count, 0);

        let drinks = drink_size_popularity(&orders);
        assert_eq!(drinks.len(), 3);
        assert_eq!(drinks[0].category, DrinkSize::Medium);
        assert_eq!(drinks[0].order_count, 1);
        assert_eq!(drinks[1].category, DrinkSize::Small);
    }

    #[test]
    fn test_average_size_by_crust() {
        let mut small = order(1, "a@x.com", 2);
        small.pizza_size = PizzaSize::Small;
        let mut large = order(2, "a@x.com", 4);
        large.pizza_size = PizzaSize::Large;
        let mut medium = order(3, "a@x.com", 3);
        medium.pizza_size = PizzaSize::Medium;
        let orders = vec![small, large, medium];

        let rows = average_size_by_crust(&orders, &pizza_menu());

        assert_eq!(rows.len(), 4);
        let thin = rows[0];
        assert_eq!(thin.crust, CrustType::Thin);
        assert_eq!(thin.order_count, 0);
        assert_eq!(thin.average_inches, None);

        let thick = rows[1];
        assert_eq!(thick.order_count, 2);
        assert_eq!(thick.average_inches, Some(12));

        assert_eq!(rows[2].average_inches, Some(12));
        assert_eq!(rows[3].average_inches, None);
    }

    #[test]
    fn test_average_truncates() {
        let mut a = order(1, "a@x.com", 1);
        a.pizza_size = PizzaSize::Small;
        let mut b = order(2, "a@x.com", 1);
        b.pizza_size = PizzaSize::Medium;
        let mut c = order(3, "a@x.com", 1);
        c.pizza_size = PizzaSize::Medium;

        // (8 + 12 + 12) / 3 = 10.67 → 10
        let rows = average_size_by_crust(&[a, b, c], &pizza_menu());
        assert_eq!(rows[0].average_inches, Some(10));
    }

    #[test]
    fn test_rows_serialize() {
        let row = CategoryCount {
            category: CrustType::GlutenFree,
            order_count: 3,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"category":"gluten-free","order_count":3}"#);
    }
}
