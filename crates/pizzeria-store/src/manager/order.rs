//! # Order Manager
//!
//! Places orders, completes them and looks them up.
//!
//! ## Placing an Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OrderRequest { email, pizza_id, pizza_size, drink }                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  email valid?            ──✗──► Validation                             │
//! │  pizza exists?           ──✗──► NotFound                               │
//! │  pizza on sale?          ──✗──► Unavailable (sold out / removed)       │
//! │  drink (if any) same two checks                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Order { id: next, date: today, status: InProgress } ──► save          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected request writes nothing and consumes no id.

use chrono::{Local, NaiveDate};
use pizzeria_core::report;
use pizzeria_core::{
    Drink, Identified, MenuItem, Order, OrderRequest, OrderStatus, Pizza, RecordSet,
};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::repository::Repository;

/// Order operations. Reads the menus to check what is being ordered.
pub struct OrderManager<'a> {
    orders: &'a dyn Repository<Order>,
    pizzas: &'a dyn Repository<Pizza>,
    drinks: &'a dyn Repository<Drink>,
}

impl<'a> OrderManager<'a> {
    pub fn new(
        orders: &'a dyn Repository<Order>,
        pizzas: &'a dyn Repository<Pizza>,
        drinks: &'a dyn Repository<Drink>,
    ) -> Self {
        OrderManager {
            orders,
            pizzas,
            drinks,
        }
    }

    /// Places an order dated today (local time).
    pub fn place_order(&self, request: OrderRequest) -> StoreResult<Order> {
        self.place_order_on(request, Local::now().date_naive())
    }

    /// Places an order with an explicit date.
    ///
    /// ## Errors
    /// - [`StoreError::Validation`] for a bad email
    /// - [`StoreError::NotFound`] if the pizza or drink id is unknown
    /// - [`StoreError::Unavailable`] if either is sold out or removed
    pub fn place_order_on(&self, request: OrderRequest, date: NaiveDate) -> StoreResult<Order> {
        request.validate()?;

        let pizzas = self.pizzas.load_all()?;
        ensure_orderable(&pizzas, request.pizza_id)?;

        if let Some(choice) = request.drink {
            let drinks = self.drinks.load_all()?;
            ensure_orderable(&drinks, choice.drink_id)?;
        }

        let mut orders = self.orders.load_all()?;
        let order = Order::from_request(orders.next_id()?, request, date);
        orders.push(order.clone())?;
        self.orders.save_all(&orders)?;

        info!(
            id = order.id,
            email = %order.customer_email,
            pizza_id = order.pizza_id,
            drink_id = ?order.drink_id(),
            "Placed order"
        );
        Ok(order)
    }

    /// Marks an in-progress order complete.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] for an unknown id
    /// - [`StoreError::OrderAlreadyComplete`] if it was completed before
    pub fn mark_complete(&self, id: u32) -> StoreResult<Order> {
        let mut orders = self.orders.load_all()?;
        let order = orders
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(Order::ENTITY, id))?;

        if order.status.is_complete() {
            warn!(id, "Order already complete");
            return Err(StoreError::OrderAlreadyComplete { id });
        }

        order.status = OrderStatus::Complete;
        let completed = order.clone();
        self.orders.save_all(&orders)?;

        info!(id, "Completed order");
        Ok(completed)
    }

    /// Every order placed with `email`, ignoring case, in stored order.
    ///
    /// ## Errors
    /// [`StoreError::NoOrdersForCustomer`] when there are none.
    pub fn view_by_email(&self, email: &str) -> StoreResult<Vec<Order>> {
        let orders = self.orders.load_all()?;
        let matching = report::by_email(orders.as_slice(), email);

        debug!(email = %email, count = matching.len(), "Looked up orders by email");
        if matching.is_empty() {
            return Err(StoreError::NoOrdersForCustomer {
                email: email.trim().to_string(),
            });
        }
        Ok(matching)
    }

    pub fn view_all(&self) -> StoreResult<Vec<Order>> {
        Ok(self.orders.load_all()?.into_vec())
    }

    pub fn find(&self, id: u32) -> StoreResult<Order> {
        self.orders
            .load_all()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(Order::ENTITY, id))
    }
}

/// The item exists and can be ordered right now.
fn ensure_orderable<T: MenuItem>(items: &RecordSet<T>, id: u32) -> StoreResult<()> {
    let item = items
        .get(id)
        .ok_or_else(|| StoreError::not_found(T::ENTITY, id))?;

    let reason = if item.is_soft_deleted() {
        "removed from the menu"
    } else if item.is_sold_out() {
        "sold out"
    } else {
        return Ok(());
    };

    warn!(entity = T::ENTITY, id, reason, "Rejected order for unavailable item");
    Err(StoreError::Unavailable {
        entity: T::ENTITY,
        id,
        reason,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;
    use pizzeria_core::{CrustType, DrinkChoice, DrinkSize, Money, PizzaSize};

    struct Fixture {
        orders: MemoryRepository<Order>,
        pizzas: MemoryRepository<Pizza>,
        drinks: MemoryRepository<Drink>,
    }

    impl Fixture {
        /// Pizza 1 on sale, 2 sold out, 3 removed. Same for drinks.
        fn new() -> Self {
            let pizza = |id: u32, is_sold_out: bool, soft_deleted: bool| Pizza {
                id,
                name: format!("Pizza {}", id),
                topping_count: 1,
                crust: CrustType::Thin,
                price: Money::from_cents(1000),
                is_sold_out,
                soft_deleted,
            };
            let drink = |id: u32, is_sold_out: bool, soft_deleted: bool| Drink {
                id,
                name: format!("Drink {}", id),
                price: Money::from_cents(200),
                is_sold_out,
                soft_deleted,
            };

            Fixture {
                orders: MemoryRepository::new(),
                pizzas: MemoryRepository::with_records(vec![
                    pizza(1, false, false),
                    pizza(2, true, false),
                    pizza(3, false, true),
                ]),
                drinks: MemoryRepository::with_records(vec![
                    drink(1, false, false),
                    drink(2, true, false),
                    drink(3, false, true),
                ]),
            }
        }

        fn manager(&self) -> OrderManager<'_> {
            OrderManager::new(&self.orders, &self.pizzas, &self.drinks)
        }
    }

    fn request(email: &str, pizza_id: u32, drink_id: Option<u32>) -> OrderRequest {
        OrderRequest {
            customer_email: email.to_string(),
            pizza_id,
            pizza_size: PizzaSize::Medium,
            drink: drink_id.map(|drink_id| DrinkChoice {
                drink_id,
                size: DrinkSize::Large,
            }),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_place_order() {
        let fx = Fixture::new();
        let orders = fx.manager();

        let order = orders
            .place_order_on(request("ann@x.com", 1, Some(1)), day(3))
            .unwrap();

        assert_eq!(order.id, 1);
        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!(order.order_date, day(3));
        assert_eq!(order.drink_id(), Some(1));
        assert_eq!(orders.find(1).unwrap(), order);
    }

    #[test]
    fn test_place_order_without_drink() {
        let fx = Fixture::new();
        let order = fx
            .manager()
            .place_order_on(request("ann@x.com", 1, None), day(3))
            .unwrap();
        assert_eq!(order.drink, None);
    }

    #[test]
    fn test_place_order_uses_today() {
        let fx = Fixture::new();
        let before = Local::now().date_naive();
        let order = fx.manager().place_order(request("ann@x.com", 1, None)).unwrap();
        let after = Local::now().date_naive();

        assert!(order.order_date == before || order.order_date == after);
    }

    #[test]
    fn test_rejected_orders_write_nothing() {
        let fx = Fixture::new();
        let orders = fx.manager();

        assert!(matches!(
            orders.place_order_on(request("ann@x.com", 2, None), day(1)),
            Err(StoreError::Unavailable { entity: "Pizza", id: 2, reason: "sold out" })
        ));
        assert!(matches!(
            orders.place_order_on(request("ann@x.com", 3, None), day(1)),
            Err(StoreError::Unavailable { entity: "Pizza", id: 3, .. })
        ));
        assert!(matches!(
            orders.place_order_on(request("ann@x.com", 1, Some(2)), day(1)),
            Err(StoreError::Unavailable { entity: "Drink", id: 2, .. })
        ));
        assert!(matches!(
            orders.place_order_on(request("ann@x.com", 1, Some(3)), day(1)),
            Err(StoreError::Unavailable { entity: "Drink", id: 3, .. })
        ));
        assert!(orders
            .place_order_on(request("ann@x.com", 9, None), day(1))
            .unwrap_err()
            .is_not_found());
        assert!(orders
            .place_order_on(request("ann@x.com", 1, Some(9)), day(1))
            .unwrap_err()
            .is_not_found());
        assert!(matches!(
            orders.place_order_on(request("ann#x.com", 1, None), day(1)),
            Err(StoreError::Validation(_))
        ));

        assert!(orders.view_all().unwrap().is_empty());

        // No id was consumed by the rejections
        let placed = orders
            .place_order_on(request("ann@x.com", 1, None), day(1))
            .unwrap();
        assert_eq!(placed.id, 1);
    }

    #[test]
    fn test_mark_complete() {
        let fx = Fixture::new();
        let orders = fx.manager();
        orders
            .place_order_on(request("ann@x.com", 1, None), day(1))
            .unwrap();

        let done = orders.mark_complete(1).unwrap();
        assert_eq!(done.status, OrderStatus::Complete);
        assert_eq!(orders.find(1).unwrap().status, OrderStatus::Complete);

        assert!(matches!(
            orders.mark_complete(1),
            Err(StoreError::OrderAlreadyComplete { id: 1 })
        ));
        assert!(orders.mark_complete(2).unwrap_err().is_not_found());
    }

    #[test]
    fn test_view_by_email_ignores_case() {
        let fx = Fixture::new();
        let orders = fx.manager();
        orders
            .place_order_on(request("Ann@X.com", 1, None), day(1))
            .unwrap();
        orders
            .place_order_on(request("bob@x.com", 1, None), day(2))
            .unwrap();
        orders
            .place_order_on(request("ann@x.com", 1, Some(1)), day(3))
            .unwrap();

        let found = orders.view_by_email("ANN@x.com").unwrap();
        let ids: Vec<u32> = found.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(matches!(
            orders.view_by_email("zed@x.com"),
            Err(StoreError::NoOrdersForCustomer { .. })
        ));
    }

    #[test]
    fn test_orders_survive_menu_changes() {
        let fx = Fixture::new();
        let orders = fx.manager();
        orders
            .place_order_on(request("ann@x.com", 1, Some(1)), day(1))
            .unwrap();

        crate::manager::MenuManager::<Pizza>::new(&fx.pizzas)
            .remove(1)
            .unwrap();

        assert_eq!(orders.find(1).unwrap().pizza_id, 1);
        assert!(orders.mark_complete(1).is_ok());
    }
}
