//! # pizzeria-core: Pure Business Logic for the Pizzeria
//!
//! This crate is the **heart** of the ordering and reporting system. It holds
//! the record types, the in-memory snapshot collection, validation rules and
//! every report computation as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pizzeria Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Front end (menu / CLI, external)                │   │
//! │  │    Add pizza ──► Place order ──► Mark complete ──► Reports      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                pizzeria-store (Storage Layer)                   │   │
//! │  │     MenuManager, OrderManager, ReportEngine, flat files         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ snapshots                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ pizzeria-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  records  │  │  report   │  │ validation│  │   │
//! │  │   │  Pizza    │  │ RecordSet │  │  top-N    │  │   rules   │  │   │
//! │  │   │  Drink    │  │ id index  │  │  spending │  │  checks   │  │   │
//! │  │   │  Order    │  │           │  │  ranking  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Record types (Pizza, Drink, Order) and their categories
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`records`] - `RecordSet`, the id-indexed snapshot of one record kind
//! - [`report`] - Read-only aggregations over snapshots
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation before any mutation
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::money::Money;
//! use pizzeria_core::records::RecordSet;
//! use pizzeria_core::types::{CrustType, MenuItem, NewPizza, Pizza};
//!
//! let mut pizzas: RecordSet<Pizza> = RecordSet::new();
//! let draft = NewPizza {
//!     name: "Margherita".to_string(),
//!     topping_count: 2,
//!     crust: CrustType::Thin,
//!     price: Money::from_cents(1099),
//! };
//! let pizza = Pizza::from_draft(pizzas.next_id().unwrap(), draft);
//! pizzas.push(pizza).unwrap();
//!
//! assert_eq!(pizzas.next_id().unwrap(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod records;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pizzeria_core::Money` instead of
// `use pizzeria_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use records::RecordSet;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest accepted pizza or drink name, in characters.
pub const MAX_NAME_LEN: usize = 60;

/// Longest accepted customer email, in characters.
pub const MAX_EMAIL_LEN: usize = 254;

/// Upper bound on toppings for a single pizza.
///
/// ## Business Reason
/// Keeps a typo (e.g. 100 instead of 10) from reaching the menu.
pub const MAX_TOPPINGS: u32 = 20;
