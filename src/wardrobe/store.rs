use super::storage::KeyValueStorage;
use super::types::{Category, ClothingItem};
use crate::error::StorageError;
use std::sync::Arc;

/// Durable slot holding the JSON array of wardrobe items.
pub const WARDROBE_KEY: &str = "aura_wardrobe";

/// The wardrobe: an ordered, most-recent-first list of items mirrored to one
/// durable slot after every mutation.
///
/// Nothing here returns an error. Unreadable storage loads as an empty
/// wardrobe and failed writes are logged; the in-memory list stays
/// authoritative for the session.
pub struct ItemStore {
    storage: Arc<dyn KeyValueStorage>,
    items: Vec<ClothingItem>,
}

impl ItemStore {
    /// Open the store and load whatever the slot holds.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        let items = Self::load(storage.as_ref());
        Self { storage, items }
    }

    /// Read the persisted wardrobe, or an empty one if the slot is missing
    /// or does not hold a JSON array of items.
    pub fn load(storage: &dyn KeyValueStorage) -> Vec<ClothingItem> {
        let raw = match storage.get(WARDROBE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(backend = storage.name(), "failed to read wardrobe: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ClothingItem>>(&raw) {
            Ok(items) => {
                tracing::debug!(count = items.len(), "loaded wardrobe");
                items
            }
            Err(err) => {
                tracing::warn!(
                    backend = storage.name(),
                    "stored wardrobe is unreadable, starting empty: {err}"
                );
                Vec::new()
            }
        }
    }

    /// Discard in-memory state and reload from storage.
    pub fn reload(&mut self) {
        self.items = Self::load(self.storage.as_ref());
    }

    /// Insert at the front. An item whose id is already present replaces
    /// the old entry so ids stay unique.
    pub fn add(&mut self, item: ClothingItem) {
        self.items.retain(|existing| existing.id != item.id);
        self.items.insert(0, item);
        self.persist();
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            tracing::debug!(id, "remove ignored, no such item");
        }
        self.persist();
    }

    /// Write the whole wardrobe to storage; last successful write wins.
    pub fn persist(&self) {
        if let Err(err) = self.try_persist() {
            tracing::warn!(backend = self.storage.name(), "failed to persist wardrobe: {err}");
        }
    }

    fn try_persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.items).map_err(|source| StorageError::Encode {
            key: WARDROBE_KEY.to_string(),
            source,
        })?;
        self.storage.set(WARDROBE_KEY, &json)
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self, filter: &WardrobeFilter) -> Vec<&ClothingItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    pub fn stats(&self) -> WardrobeStats {
        let by_category = Category::ALL
            .into_iter()
            .map(|category| {
                let count = self
                    .items
                    .iter()
                    .filter(|item| item.category == category)
                    .count();
                (category, count)
            })
            .collect();

        WardrobeStats {
            total: self.items.len(),
            by_category,
        }
    }
}

/// Category chip plus free-text search, as on the wardrobe grid.
#[derive(Debug, Clone, Default)]
pub struct WardrobeFilter {
    /// `None` shows every category.
    pub category: Option<Category>,
    /// Case-insensitive substring of sub-category or color. Empty matches all.
    pub search: String,
}

impl WardrobeFilter {
    pub fn matches(&self, item: &ClothingItem) -> bool {
        if self.category.is_some_and(|category| item.category != category) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || item.sub_category.to_lowercase().contains(&needle)
            || item.color.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardrobeStats {
    pub total: usize,
    /// Every category in display order, zero counts included.
    pub by_category: Vec<(Category, usize)>,
}

impl WardrobeStats {
    pub fn count(&self, category: Category) -> usize {
        self.by_category
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }
}
