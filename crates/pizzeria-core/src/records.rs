//! # Record Sets
//!
//! `RecordSet<T>` is the in-memory snapshot of one record kind: every
//! record in file (= id) order plus an id → position index.
//!
//! ## Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  records:   [ Pizza#1 ][ Pizza#2 ][ Pizza#3 ][ Pizza#4 ]                │
//! │                 ▲          ▲          ▲          ▲                      │
//! │  positions: { 1 → 0,    2 → 1,     3 → 2,     4 → 3 }                   │
//! │                                                                         │
//! │  get(3) = records[positions[3]]          O(1), no ordering assumption  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups never assume the records are sorted or gap-free, so a
//! hand-edited file with ids out of order still resolves correctly.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::Identified;

/// Ordered, id-indexed collection of one record kind.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet<T> {
    records: Vec<T>,
    positions: HashMap<u32, usize>,
}

impl<T> Default for RecordSet<T> {
    fn default() -> Self {
        RecordSet {
            records: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Identified> RecordSet<T> {
    /// Creates an empty set.
    pub fn new() -> Self {
        RecordSet::default()
    }

    /// Builds a set from records in stored order.
    ///
    /// ## Errors
    /// [`CoreError::DuplicateId`] if two records share an id.
    pub fn from_records(records: Vec<T>) -> CoreResult<Self> {
        let mut positions = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if positions.insert(record.id(), position).is_some() {
                return Err(CoreError::DuplicateId {
                    entity: T::ENTITY,
                    id: record.id(),
                });
            }
        }

        Ok(RecordSet { records, positions })
    }

    /// The id the next added record receives.
    ///
    /// `count + 1` while ids are dense; if a stored file ever skipped ids this
    /// moves past the highest one instead of colliding with it.
    ///
    /// ## Errors
    /// [`CoreError::IdSpaceExhausted`] once `u32::MAX` is taken.
    pub fn next_id(&self) -> CoreResult<u32> {
        let highest = self.positions.keys().copied().max().unwrap_or(0);
        let count = u32::try_from(self.records.len()).unwrap_or(u32::MAX);

        count
            .max(highest)
            .checked_add(1)
            .ok_or(CoreError::IdSpaceExhausted { entity: T::ENTITY })
    }

    /// Appends a record.
    ///
    /// ## Errors
    /// [`CoreError::DuplicateId`] if the id is already present.
    pub fn push(&mut self, record: T) -> CoreResult<()> {
        let id = record.id();
        if self.positions.contains_key(&id) {
            return Err(CoreError::DuplicateId {
                entity: T::ENTITY,
                id,
            });
        }

        self.positions.insert(id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.positions.get(&id).map(|&position| &self.records[position])
    }

    /// Mutable access by id. The id itself must not be changed through it.
    pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        match self.positions.get(&id) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.positions.contains_key(&id)
    }
}

impl<T> RecordSet<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn into_vec(self) -> Vec<T> {
        self.records
    }
}

impl<'a, T> IntoIterator for &'a RecordSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
