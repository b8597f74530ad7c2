//! # In-Memory Repository
//!
//! Holds a record collection in process memory. Used by tests and by
//! [`crate::Pizzeria::in_memory`].

use std::cell::RefCell;

use pizzeria_core::{Identified, RecordSet};

use super::Repository;
use crate::error::StoreResult;

/// Repository backed by a `Vec` behind a `RefCell`.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    records: RefCell<Vec<T>>,
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        MemoryRepository {
            records: RefCell::new(Vec::new()),
        }
    }

    /// Starts with `records` already stored.
    pub fn with_records(records: Vec<T>) -> Self {
        MemoryRepository {
            records: RefCell::new(records),
        }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        MemoryRepository::new()
    }
}

impl<T: Identified + Clone> Repository<T> for MemoryRepository<T> {
    fn load_all(&self) -> StoreResult<RecordSet<T>> {
        Ok(RecordSet::from_records(self.records.borrow().clone())?)
    }

    fn save_all(&self, records: &RecordSet<T>) -> StoreResult<()> {
        *self.records.borrow_mut() = records.as_slice().to_vec();
        Ok(())
    }
}
