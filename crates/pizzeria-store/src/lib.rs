//! # pizzeria-store: Storage Layer for the Pizzeria
//!
//! This crate reads and writes the pizza, drink and order records and runs
//! every operation as load → modify → save against them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizzeria Data Flow                               │
//! │                                                                         │
//! │  Front end (place order, edit menu, run report)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  pizzeria-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Pizzeria    │    │   Managers    │    │ Repositories │  │   │
//! │  │   │ (pizzeria.rs) │    │ menu / order  │    │ flat file    │  │   │
//! │  │   │               │───►│ ReportEngine  │───►│ in memory    │  │   │
//! │  │   │ StoreConfig   │    │               │    │ codec.rs     │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   data/pizzas.txt   data/drinks.txt   data/orders.txt           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pizzeria`] - The `Pizzeria` facade that owns the repositories
//! - [`config`] - Data directory and file names (TOML + environment)
//! - [`codec`] - One-line `#`-delimited record format
//! - [`repository`] - The `Repository` trait and its backends
//! - [`manager`] - Menu and order operations
//! - [`reports`] - Snapshot loading for the report functions
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pizzeria_store::{Pizzeria, StoreConfig};
//!
//! let config = StoreConfig::load(None)?;
//! let pizzeria = Pizzeria::open(&config)?;
//!
//! let order = pizzeria.orders().place_order(request)?;
//! let top = pizzeria.reports().top_pizzas(3)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod codec;
pub mod config;
pub mod error;
pub mod manager;
pub mod pizzeria;
pub mod reports;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{RecordError, StoreError, StoreResult};
pub use manager::{MenuManager, OrderManager};
pub use pizzeria::Pizzeria;
pub use reports::ReportEngine;
pub use repository::{FlatFileRepository, MemoryRepository, Repository};
