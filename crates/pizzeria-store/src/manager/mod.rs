//! # Managers
//!
//! The mutating operations. Each call loads a fresh snapshot, applies one
//! change and saves, so a manager holds no state beyond its repositories.
//!
//! - [`MenuManager`] - Pizzas and drinks, through [`pizzeria_core::MenuItem`]
//! - [`OrderManager`] - Placing, completing and finding orders

pub mod menu;
pub mod order;

pub use menu::MenuManager;
pub use order::OrderManager;
