//! Base registry trait and implementation.
//!
//! An insertion-ordered, thread-safe map from id to shared item. Policy
//! (validation, diagnostics) lives in the typed registries built on top.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

/// Trait for items that can be stored in a registry.
///
/// Each registerable item must provide a unique ID.
pub trait Registerable: Send + Sync {
    /// Returns the unique identifier for this item.
    fn registry_id(&self) -> &str;
}

/// Returned by [`BaseRegistry::insert`] once the registry has been sealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sealed;

struct Entries<T: ?Sized> {
    items: IndexMap<String, Arc<T>>,
    sealed: bool,
}

/// Generic registry for managing items by ID.
///
/// - Writers are serialized behind a `RwLock`
/// - Inserting an existing ID replaces the item in place, keeping its position
/// - Removal keeps the relative order of the remaining items
/// - Listing returns an owned snapshot, unaffected by later mutation
/// - Once sealed, the registry stays empty; the seal is checked under the
///   same write lock as every insert
pub struct BaseRegistry<T: ?Sized + Registerable> {
    entries: RwLock<Entries<T>>,
}

impl<T: ?Sized + Registerable> BaseRegistry<T> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries {
                items: IndexMap::new(),
                sealed: false,
            }),
        }
    }

    /// Insert an item, returning the item it replaced, if any.
    pub fn insert(&self, item: Arc<T>) -> Result<Option<Arc<T>>, Sealed> {
        let mut entries = self.entries.write();
        if entries.sealed {
            return Err(Sealed);
        }
        let id = item.registry_id().to_string();
        Ok(entries.items.insert(id, item))
    }

    /// Remove an item by ID, returning it if it was present.
    pub fn remove(&self, id: &str) -> Option<Arc<T>> {
        self.entries.write().items.shift_remove(id)
    }

    /// Get an item by ID.
    pub fn get(&self, id: &str) -> Option<Arc<T>> {
        self.entries.read().items.get(id).cloned()
    }

    /// Check if an item with the given ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.read().items.contains_key(id)
    }

    /// List all registered item IDs in insertion order.
    pub fn list_ids(&self) -> Vec<String> {
        self.entries.read().items.keys().cloned().collect()
    }

    /// Get the number of registered items.
    pub fn len(&self) -> usize {
        self.entries.read().items.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().items.is_empty()
    }

    /// All items in insertion order.
    pub fn snapshot(&self) -> Vec<Arc<T>> {
        self.entries.read().items.values().cloned().collect()
    }

    /// Remove every item, returning how many were dropped.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let count = entries.items.len();
        entries.items.clear();
        count
    }

    /// Clear the registry and refuse every later insert.
    pub fn seal(&self) -> usize {
        let mut entries = self.entries.write();
        entries.sealed = true;
        let count = entries.items.len();
        entries.items.clear();
        count
    }

    pub fn is_sealed(&self) -> bool {
        self.entries.read().sealed
    }
}

impl<T: ?Sized + Registerable> Default for BaseRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
