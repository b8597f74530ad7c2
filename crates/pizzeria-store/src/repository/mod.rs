//! # Repository Module
//!
//! Where record snapshots come from and where they go back to.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Load → Modify → Save                                 │
//! │                                                                         │
//! │  MenuManager / OrderManager / ReportEngine                             │
//! │       │                                                                 │
//! │       │  repo.load_all()           ← full snapshot, fresh each call     │
//! │       ▼                                                                 │
//! │  RecordSet<T>  ── modify in memory ──►  repo.save_all(&set)            │
//! │       │                                      │                          │
//! │       ▼                                      ▼                          │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │ FlatFileRepository   │   or   │  MemoryRepository    │              │
//! │  │ one `#` line/record  │        │  Vec<T> in a RefCell │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! │                                                                         │
//! │  Rejected requests never reach save_all: files stay byte-identical.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`FlatFileRepository`] - Delimited text files, one per record kind
//! - [`MemoryRepository`] - In-process storage for tests and demos

pub mod flat_file;
pub mod memory;

pub use flat_file::FlatFileRepository;
pub use memory::MemoryRepository;

use pizzeria_core::RecordSet;

use crate::error::StoreResult;

/// Whole-collection storage for one record kind.
///
/// Implementations replace the stored collection wholesale on save; there
/// are no partial updates.
pub trait Repository<T> {
    /// Reads every stored record, in stored order.
    fn load_all(&self) -> StoreResult<RecordSet<T>>;

    /// Replaces the stored collection with `records`.
    fn save_all(&self, records: &RecordSet<T>) -> StoreResult<()>;
}
