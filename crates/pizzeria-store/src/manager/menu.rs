//! # Menu Manager
//!
//! Add, remove, restore, edit and list one kind of menu item. The same code
//! serves pizzas and drinks through the [`MenuItem`] trait.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate input ──✗──► Validation error, nothing loaded                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load snapshot ──✗──► Io / Malformed, nothing written                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  find + check state ──✗──► NotFound / AlreadyRemoved / NotRemoved      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  modify in memory ──► save snapshot ──► return the changed item        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pizzeria_core::report;
use pizzeria_core::{MenuItem, RecordSet};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::repository::Repository;

/// Menu operations for pizzas or drinks.
///
/// ## Usage
/// ```rust,ignore
/// let pizzeria = Pizzeria::in_memory();
/// let pizza = pizzeria.pizzas().add(NewPizza { .. })?;
/// pizzeria.pizzas().remove(pizza.id)?;
/// ```
pub struct MenuManager<'a, T> {
    repo: &'a dyn Repository<T>,
}

impl<'a, T: MenuItem> MenuManager<'a, T> {
    pub fn new(repo: &'a dyn Repository<T>) -> Self {
        MenuManager { repo }
    }

    /// Adds an item with the next free id. New items are available.
    pub fn add(&self, draft: T::Draft) -> StoreResult<T> {
        T::validate_draft(&draft)?;

        let mut items = self.repo.load_all()?;
        let item = T::from_draft(items.next_id()?, draft);
        items.push(item.clone())?;
        self.repo.save_all(&items)?;

        info!(entity = T::ENTITY, id = item.id(), name = %item.name(), "Added menu item");
        Ok(item)
    }

    /// Soft-deletes an item. Its id stays taken and orders keep pointing
    /// at it.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] for an unknown id
    /// - [`StoreError::AlreadyRemoved`] if it was removed before
    pub fn remove(&self, id: u32) -> StoreResult<T> {
        let mut items = self.repo.load_all()?;
        let item = lookup_mut(&mut items, id)?;

        if item.is_soft_deleted() {
            warn!(entity = T::ENTITY, id, "Item already removed");
            return Err(StoreError::AlreadyRemoved {
                entity: T::ENTITY,
                id,
            });
        }

        item.set_soft_deleted(true);
        let removed = item.clone();
        self.repo.save_all(&items)?;

        info!(entity = T::ENTITY, id, "Removed menu item");
        Ok(removed)
    }

    /// Puts a removed item back on the menu.
    ///
    /// ## Errors
    /// - [`StoreError::NotFound`] for an unknown id
    /// - [`StoreError::NotRemoved`] if the item was never removed
    pub fn restore(&self, id: u32) -> StoreResult<T> {
        let mut items = self.repo.load_all()?;
        let item = lookup_mut(&mut items, id)?;

        if !item.is_soft_deleted() {
            warn!(entity = T::ENTITY, id, "Item is not removed");
            return Err(StoreError::NotRemoved {
                entity: T::ENTITY,
                id,
            });
        }

        item.set_soft_deleted(false);
        let restored = item.clone();
        self.repo.save_all(&items)?;

        info!(entity = T::ENTITY, id, "Restored menu item");
        Ok(restored)
    }

    /// Changes one field of an item that is still on the menu.
    ///
    /// Removed items can't be edited; they report [`StoreError::NotFound`]
    /// the same as unknown ids.
    pub fn edit(&self, id: u32, edit: T::Edit) -> StoreResult<T> {
        T::validate_edit(&edit)?;

        let mut items = self.repo.load_all()?;
        let item = match items.get_mut(id) {
            Some(item) if !item.is_soft_deleted() => item,
            _ => {
                warn!(entity = T::ENTITY, id, "No editable item with this id");
                return Err(StoreError::not_found(T::ENTITY, id));
            }
        };

        item.apply_edit(edit);
        let edited = item.clone();
        self.repo.save_all(&items)?;

        info!(entity = T::ENTITY, id, "Edited menu item");
        Ok(edited)
    }

    /// Items that can be ordered right now, in stored order.
    ///
    /// ## Errors
    /// [`StoreError::NoneAvailable`] when nothing qualifies.
    pub fn view_available(&self) -> StoreResult<Vec<T>> {
        let items = self.repo.load_all()?;
        let available = report::available(&items);

        debug!(entity = T::ENTITY, count = available.len(), "Listed available items");
        if available.is_empty() {
            return Err(StoreError::NoneAvailable { entity: T::ENTITY });
        }
        Ok(available)
    }

    /// Every stored item, removed and sold-out ones included.
    pub fn view_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.repo.load_all()?.into_vec())
    }

    pub fn find(&self, id: u32) -> StoreResult<T> {
        self.repo
            .load_all()?
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))
    }
}

fn lookup_mut<T: MenuItem>(items: &mut RecordSet<T>, id: u32) -> StoreResult<&mut T> {
    items.get_mut(id).ok_or_else(|| {
        warn!(entity = T::ENTITY, id, "Unknown id");
        StoreError::not_found(T::ENTITY, id)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
