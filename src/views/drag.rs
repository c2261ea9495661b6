//! Drag-and-drop as two capabilities: things that can be picked up, and
//! places that accept them. The pointer mechanics belong to the host UI.

use crate::favorites::{FavoritesStore, KeyValueStore, StorageError};
use crate::models::Property;
use tracing::debug;

/// Drag type carried by listing cards and detail pages
pub const DRAG_KIND_PROPERTY: &str = "property";

#[derive(Debug, Clone, PartialEq)]
pub struct DragItem {
    pub kind: &'static str,
    pub property: Property,
}

pub trait DragSource {
    fn drag_item(&self) -> DragItem;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Added,
    AlreadyPresent,
    Rejected,
}

pub trait DropZone {
    fn accepts(&self, kind: &str) -> bool;

    fn drop_item(&mut self, item: DragItem) -> Result<DropOutcome, StorageError>;
}

impl DragSource for Property {
    fn drag_item(&self) -> DragItem {
        DragItem {
            kind: DRAG_KIND_PROPERTY,
            property: self.clone(),
        }
    }
}

/// The favorites sidebar: dropping a listing saves it
impl<S: KeyValueStore> DropZone for FavoritesStore<S> {
    fn accepts(&self, kind: &str) -> bool {
        kind == DRAG_KIND_PROPERTY
    }

    fn drop_item(&mut self, item: DragItem) -> Result<DropOutcome, StorageError> {
        if !self.accepts(item.kind) {
            debug!("Favorites ignored a dropped {:?}", item.kind);
            return Ok(DropOutcome::Rejected);
        }

        Ok(if self.add(item.property)? {
            DropOutcome::Added
        } else {
            DropOutcome::AlreadyPresent
        })
    }
}
