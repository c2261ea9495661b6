//! The user's saved listings, mirrored to storage after every change.

use super::storage::{KeyValueStore, StorageError};
use crate::models::Property;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Storage key holding the serialized favorites list
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered set of saved properties, unique by id.
///
/// Every mutation writes the full list back to storage before returning.
/// If that write fails the mutation is undone, so the in-memory list and
/// the stored list never disagree.
pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
    items: Vec<Property>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Restore favorites from storage. Missing, unreadable or malformed
    /// content yields an empty list.
    pub fn load(storage: S) -> Self {
        let items = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Property>>(&raw) {
                Ok(items) => dedupe(items),
                Err(e) => {
                    warn!("Discarding malformed stored favorites: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read stored favorites: {}", e);
                Vec::new()
            }
        };

        debug!("Loaded {} favorites", items.len());
        Self { storage, items }
    }

    pub fn items(&self) -> &[Property] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Save a property. Returns `false` if one with the same id was already saved.
    pub fn add(&mut self, property: Property) -> Result<bool, StorageError> {
        let inserted = !self.contains(&property.id);
        let id = property.id.clone();
        if inserted {
            self.items.push(property);
        }

        if let Err(e) = self.persist() {
            if inserted {
                self.items.pop();
            }
            return Err(e);
        }

        if inserted {
            info!("Added {} to favorites", id);
        }
        Ok(inserted)
    }

    /// Forget a property. Returns `false` if it was not saved.
    pub fn remove(&mut self, id: &str) -> Result<bool, StorageError> {
        let removed = self
            .items
            .iter()
            .position(|p| p.id == id)
            .map(|index| (index, self.items.remove(index)));

        if let Err(e) = self.persist() {
            if let Some((index, property)) = removed {
                self.items.insert(index, property);
            }
            return Err(e);
        }

        if removed.is_some() {
            info!("Removed {} from favorites", id);
        }
        Ok(removed.is_some())
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        let previous = std::mem::take(&mut self.items);
        if let Err(e) = self.persist() {
            self.items = previous;
            return Err(e);
        }

        info!("Cleared {} favorites", previous.len());
        Ok(())
    }

    /// Add if absent, remove if present. Returns whether it is now saved.
    pub fn toggle(&mut self, property: Property) -> Result<bool, StorageError> {
        if self.contains(&property.id) {
            self.remove(&property.id)?;
            Ok(false)
        } else {
            self.add(property)
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.items)?;
        self.storage.set(FAVORITES_KEY, &json)
    }
}

fn dedupe(items: Vec<Property>) -> Vec<Property> {
    let total = items.len();
    let mut seen = HashSet::with_capacity(total);
    let unique: Vec<Property> = items
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect();

    if unique.len() != total {
        warn!(
            "Stored favorites held {} duplicate entries, keeping first occurrences",
            total - unique.len()
        );
    }
    unique
}
