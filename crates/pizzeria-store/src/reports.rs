//! # Report Engine
//!
//! Loads fresh snapshots and hands them to the pure report functions in
//! [`pizzeria_core::report`]. Nothing here writes.
//!
//! ## Snapshots per Report
//! ```text
//! ┌──────────────────────────────┬────────┬────────┬────────┐
//! │ Report                       │ orders │ pizzas │ drinks │
//! ├──────────────────────────────┼────────┼────────┼────────┤
//! │ chronological / in progress  │   ✓    │        │        │
//! │ pizza / drink size ranking   │   ✓    │        │        │
//! │ removed / sold-out items     │        │   ✓ or ✓        │
//! │ top pizzas, crusts, avg size │   ✓    │   ✓    │        │
//! │ top drinks                   │   ✓    │        │   ✓    │
//! │ above price, spending,       │   ✓    │   ✓    │   ✓    │
//! │ receipts, revenue            │        │        │        │
//! └──────────────────────────────┴────────┴────────┴────────┘
//! ```

use pizzeria_core::report::{
    self, CategoryCount, CrustSizeAverage, CustomerSpend, PopularityEntry, PricedOrder, Receipt,
    RevenueSummary,
};
use pizzeria_core::validation::validate_limit;
use pizzeria_core::{CrustType, Drink, DrinkSize, Money, Order, Pizza, PizzaSize, RecordSet};
use tracing::debug;

use crate::error::StoreResult;
use crate::repository::Repository;

/// Read-only reporting over the three record kinds.
pub struct ReportEngine<'a> {
    orders: &'a dyn Repository<Order>,
    pizzas: &'a dyn Repository<Pizza>,
    drinks: &'a dyn Repository<Drink>,
}

impl<'a> ReportEngine<'a> {
    pub fn new(
        orders: &'a dyn Repository<Order>,
        pizzas: &'a dyn Repository<Pizza>,
        drinks: &'a dyn Repository<Drink>,
    ) -> Self {
        ReportEngine {
            orders,
            pizzas,
            drinks,
        }
    }

    fn load_orders(&self) -> StoreResult<RecordSet<Order>> {
        self.orders.load_all()
    }

    fn load_everything(
        &self,
    ) -> StoreResult<(RecordSet<Order>, RecordSet<Pizza>, RecordSet<Drink>)> {
        Ok((
            self.orders.load_all()?,
            self.pizzas.load_all()?,
            self.drinks.load_all()?,
        ))
    }

    // =========================================================================
    // Order Listings
    // =========================================================================

    /// Every order, oldest first.
    pub fn chronological_orders(&self) -> StoreResult<Vec<Order>> {
        Ok(report::chronological(self.load_orders()?.as_slice()))
    }

    pub fn in_progress_orders(&self) -> StoreResult<Vec<Order>> {
        Ok(report::in_progress(self.load_orders()?.as_slice()))
    }

    // =========================================================================
    // Menu Listings
    // =========================================================================

    pub fn removed_pizzas(&self) -> StoreResult<Vec<Pizza>> {
        Ok(report::removed(&self.pizzas.load_all()?))
    }

    pub fn removed_drinks(&self) -> StoreResult<Vec<Drink>> {
        Ok(report::removed(&self.drinks.load_all()?))
    }

    pub fn sold_out_pizzas(&self) -> StoreResult<Vec<Pizza>> {
        Ok(report::sold_out(&self.pizzas.load_all()?))
    }

    pub fn sold_out_drinks(&self) -> StoreResult<Vec<Drink>> {
        Ok(report::sold_out(&self.drinks.load_all()?))
    }

    // =========================================================================
    // Popularity
    // =========================================================================

    /// The `limit` most ordered pizzas. `limit` must be at least 1.
    pub fn top_pizzas(&self, limit: usize) -> StoreResult<Vec<PopularityEntry>> {
        validate_limit(limit)?;
        let orders = self.load_orders()?;
        let pizzas = self.pizzas.load_all()?;

        let top = report::popularity::top_pizzas(orders.as_slice(), &pizzas, limit);
        debug!(limit, rows = top.len(), "Ranked pizzas");
        Ok(top)
    }

    /// The `limit` most ordered drinks. `limit` must be at least 1.
    pub fn top_drinks(&self, limit: usize) -> StoreResult<Vec<PopularityEntry>> {
        validate_limit(limit)?;
        let orders = self.load_orders()?;
        let drinks = self.drinks.load_all()?;

        let top = report::popularity::top_drinks(orders.as_slice(), &drinks, limit);
        debug!(limit, rows = top.len(), "Ranked drinks");
        Ok(top)
    }

    pub fn crust_popularity(&self) -> StoreResult<Vec<CategoryCount<CrustType>>> {
        let orders = self.load_orders()?;
        let pizzas = self.pizzas.load_all()?;
        Ok(report::popularity::crust_popularity(orders.as_slice(), &pizzas))
    }

    pub fn pizza_size_popularity(&self) -> StoreResult<Vec<CategoryCount<PizzaSize>>> {
        Ok(report::popularity::pizza_size_popularity(
            self.load_orders()?.as_slice(),
        ))
    }

    pub fn drink_size_popularity(&self) -> StoreResult<Vec<CategoryCount<DrinkSize>>> {
        Ok(report::popularity::drink_size_popularity(
            self.load_orders()?.as_slice(),
        ))
    }

    /// One row per crust type with the truncated average diameter ordered.
    pub fn average_size_by_crust(&self) -> StoreResult<Vec<CrustSizeAverage>> {
        let orders = self.load_orders()?;
        let pizzas = self.pizzas.load_all()?;
        Ok(report::popularity::average_size_by_crust(
            orders.as_slice(),
            &pizzas,
        ))
    }

    // =========================================================================
    // Spending
    // =========================================================================

    /// Orders costing strictly more than `threshold`, in stored order.
    pub fn orders_above_price(&self, threshold: Money) -> StoreResult<Vec<PricedOrder>> {
        let (orders, pizzas, drinks) = self.load_everything()?;
        let rows =
            report::spending::orders_above_price(orders.as_slice(), &pizzas, &drinks, threshold);
        debug!(threshold = %threshold, rows = rows.len(), "Filtered orders by price");
        Ok(rows)
    }

    /// Customers ranked by total spent, highest first.
    pub fn customer_spending(&self) -> StoreResult<Vec<CustomerSpend>> {
        let (orders, pizzas, drinks) = self.load_everything()?;
        Ok(report::spending::customer_spending(
            orders.as_slice(),
            &pizzas,
            &drinks,
        ))
    }

    pub fn revenue_summary(&self) -> StoreResult<RevenueSummary> {
        let (orders, pizzas, drinks) = self.load_everything()?;
        Ok(report::spending::revenue_summary(
            orders.as_slice(),
            &pizzas,
            &drinks,
        ))
    }

    /// Every order with names resolved and its total, in stored order.
    pub fn receipts(&self) -> StoreResult<Vec<Receipt>> {
        let (orders, pizzas, drinks) = self.load_everything()?;
        Ok(report::receipts(orders.as_slice(), &pizzas, &drinks))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
