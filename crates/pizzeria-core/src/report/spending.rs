//! # Spending Reports
//!
//! Reports that price orders: orders above a threshold, the customer
//! spending ranking and the revenue summary.
//!
//! Every order is priced with [`order_total`]: current pizza price plus
//! current drink price.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::order_total;
use crate::money::Money;
use crate::records::RecordSet;
use crate::types::{Drink, Order, Pizza};

/// An order with its computed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedOrder {
    pub order: Order,
    pub total: Money,
}

/// One customer's accumulated spending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSpend {
    /// Email as first seen in the order history.
    pub email: String,
    pub order_count: usize,
    pub total: Money,
}

/// Totals across the whole order history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub order_count: usize,
    pub completed_count: usize,
    pub in_progress_count: usize,
    /// Sum of all order totals.
    pub total_revenue: Money,
    /// Sum of completed order totals only.
    pub completed_revenue: Money,
}

/// Orders whose total is strictly greater than `threshold`, in stored order.
pub fn orders_above_price(
    orders: &[Order],
    pizzas: &RecordSet<Pizza>,
    drinks: &RecordSet<Drink>,
    threshold: Money,
) -> Vec<PricedOrder> {
    orders
        .iter()
        .map(|order| PricedOrder {
            order: order.clone(),
            total: order_total(order, pizzas, drinks),
        })
        .filter(|priced| priced.total > threshold)
        .collect()
}

/// Every distinct customer ranked by total spent, highest first.
///
/// Emails are grouped case-insensitively. Equal totals keep first-seen order.
pub fn customer_spending(
    orders: &[Order],
    pizzas: &RecordSet<Pizza>,
    drinks: &RecordSet<Drink>,
) -> Vec<CustomerSpend> {
    let mut customers: Vec<CustomerSpend> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for order in orders {
        let key = order.email_key();
        let position = *positions.entry(key).or_insert_with(|| {
            customers.push(CustomerSpend {
                email: order.customer_email.clone(),
                order_count: 0,
                total: Money::zero(),
            });
            customers.len() - 1
        });

        let customer = &mut customers[position];
        customer.order_count += 1;
        customer.total += order_total(order, pizzas, drinks);
    }

    customers.sort_by(|a, b| b.total.cmp(&a.total));
    customers
}

/// Order counts and revenue totals.
pub fn revenue_summary(
    orders: &[Order],
    pizzas: &RecordSet<Pizza>,
    drinks: &RecordSet<Drink>,
) -> RevenueSummary {
    orders
        .iter()
        .fold(RevenueSummary::default(), |mut summary, order| {
            let total = order_total(order, pizzas, drinks);
            summary.order_count += 1;
            summary.total_revenue += total;
            if order.status.is_complete() {
                summary.completed_count += 1;
                summary.completed_revenue += total;
            } else {
                summary.in_progress_count += 1;
            }
            summary
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
