//! # Pizzeria Facade
//!
//! Owns the three repositories and hands out managers that borrow them.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Pizzeria                                      │
//! │                                                                         │
//! │  StoreConfig::load(None)                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pizzeria::open(&config) ← creates data dir, one file per record kind  │
//! │       │                                                                 │
//! │       ├── pizzas()  ──► MenuManager<Pizza>                             │
//! │       ├── drinks()  ──► MenuManager<Drink>                             │
//! │       ├── orders()  ──► OrderManager                                   │
//! │       └── reports() ──► ReportEngine                                   │
//! │                                                                         │
//! │  Managers are cheap borrowed views; create one per operation.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;

use pizzeria_core::{Drink, Order, Pizza};
use tracing::info;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::manager::{MenuManager, OrderManager};
use crate::reports::ReportEngine;
use crate::repository::{FlatFileRepository, MemoryRepository, Repository};

/// Entry point to the record store.
///
/// ## Usage
/// ```rust
/// use pizzeria_store::Pizzeria;
/// use pizzeria_core::{CrustType, Money, NewPizza};
///
/// let pizzeria = Pizzeria::in_memory();
/// let pizza = pizzeria
///     .pizzas()
///     .add(NewPizza {
///         name: "Margherita".to_string(),
///         topping_count: 2,
///         crust: CrustType::Thin,
///         price: Money::from_cents(1099),
///     })
///     .unwrap();
///
/// assert_eq!(pizza.id, 1);
/// ```
pub struct Pizzeria {
    pizzas: Box<dyn Repository<Pizza>>,
    drinks: Box<dyn Repository<Drink>>,
    orders: Box<dyn Repository<Order>>,
}

impl Pizzeria {
    /// Opens the flat-file store described by `config`.
    ///
    /// The data directory is created if needed. Record files are not touched
    /// until the first write.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        fs::create_dir_all(config.data_dir()).map_err(|e| StoreError::io(config.data_dir(), e))?;

        info!(data_dir = %config.data_dir().display(), "Opened pizzeria store");

        Ok(Pizzeria::with_repositories(
            Box::new(FlatFileRepository::<Pizza>::new(config.pizza_path())),
            Box::new(FlatFileRepository::<Drink>::new(config.drink_path())),
            Box::new(FlatFileRepository::<Order>::new(config.order_path())),
        ))
    }

    /// A store that lives only as long as this value.
    pub fn in_memory() -> Self {
        Pizzeria::with_repositories(
            Box::new(MemoryRepository::<Pizza>::new()),
            Box::new(MemoryRepository::<Drink>::new()),
            Box::new(MemoryRepository::<Order>::new()),
        )
    }

    pub fn with_repositories(
        pizzas: Box<dyn Repository<Pizza>>,
        drinks: Box<dyn Repository<Drink>>,
        orders: Box<dyn Repository<Order>>,
    ) -> Self {
        Pizzeria {
            pizzas,
            drinks,
            orders,
        }
    }

    pub fn pizzas(&self) -> MenuManager<'_, Pizza> {
        MenuManager::new(self.pizzas.as_ref())
    }

    pub fn drinks(&self) -> MenuManager<'_, Drink> {
        MenuManager::new(self.drinks.as_ref())
    }

    pub fn orders(&self) -> OrderManager<'_> {
        OrderManager::new(
            self.orders.as_ref(),
            self.pizzas.as_ref(),
            self.drinks.as_ref(),
        )
    }

    pub fn reports(&self) -> ReportEngine<'_> {
        ReportEngine::new(
            self.orders.as_ref(),
            self.pizzas.as_ref(),
            self.drinks.as_ref(),
        )
    }
}
