use crate::catalog::Catalog;
use crate::favorites::{FavoritesStore, KeyValueStore, StorageError};
use crate::models::Property;
use crate::views::drag::{DragItem, DragSource};
use crate::views::map::MapWidget;
use crate::views::tabs::{DetailTab, SelectableTabs, TabError, TabState};
use tracing::{debug, info};

/// Number of images in a listing's gallery
pub const GALLERY_SIZE: usize = 6;

/// Marker in the primary picture name that the gallery images vary
const PRIMARY_PICTURE_MARKER: &str = "pic1small";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub original: String,
    pub thumbnail: String,
}

/// Full-size and thumbnail paths for every gallery slot.
///
/// `images/prop1pic1small.jpg` gives `images/prop1pic3.jpg` and
/// `images/prop1pic3small.jpg` for the third slot.
pub fn gallery(picture: &str) -> Vec<GalleryImage> {
    (1..=GALLERY_SIZE)
        .map(|i| GalleryImage {
            original: picture.replace(PRIMARY_PICTURE_MARKER, &format!("pic{}", i)),
            thumbnail: picture.replace(PRIMARY_PICTURE_MARKER, &format!("pic{}small", i)),
        })
        .collect()
}

pub fn floor_plan_path(id: &str) -> String {
    format!("/images/{}-floorplan.jpg", id)
}

/// Outcome of opening `/property/:id`
#[derive(Debug)]
pub enum DetailState<'a> {
    NotFound { id: String },
    Found(PropertyDetails<'a>),
}

pub struct DetailView;

impl DetailView {
    pub fn resolve<'a>(catalog: &'a Catalog, id: &str) -> DetailState<'a> {
        match catalog.find(id) {
            Some(property) => {
                debug!("Opening details for {}", id);
                DetailState::Found(PropertyDetails::new(property))
            }
            None => {
                info!("Property {} not found", id);
                DetailState::NotFound { id: id.to_string() }
            }
        }
    }
}

/// Everything the details page shows for one listing.
///
/// Favorite membership is not held here; it is read from the store on
/// every query so other writers (drops, the saved page) are always seen.
#[derive(Debug)]
pub struct PropertyDetails<'a> {
    property: &'a Property,
    gallery: Vec<GalleryImage>,
    tabs: TabState,
    map: MapWidget,
}

impl<'a> PropertyDetails<'a> {
    pub fn new(property: &'a Property) -> Self {
        Self {
            property,
            gallery: gallery(&property.picture),
            tabs: TabState::default(),
            map: MapWidget::new(property.location.clone()),
        }
    }

    pub fn property(&self) -> &'a Property {
        self.property
    }

    pub fn gallery(&self) -> &[GalleryImage] {
        &self.gallery
    }

    pub fn floor_plan(&self) -> String {
        floor_plan_path(&self.property.id)
    }

    /// Label/value rows of the description tab
    pub fn facts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", self.property.kind.to_string()),
            ("Bedrooms", self.property.bedrooms.to_string()),
            ("Tenure", self.property.tenure.clone()),
        ]
    }

    pub fn is_favorite<S: KeyValueStore>(&self, favorites: &FavoritesStore<S>) -> bool {
        favorites.contains(&self.property.id)
    }

    pub fn favorite_label<S: KeyValueStore>(
        &self,
        favorites: &FavoritesStore<S>,
    ) -> &'static str {
        if self.is_favorite(favorites) {
            "Remove from Favorites"
        } else {
            "Add to Favorites"
        }
    }

    /// Flip favorite membership; returns whether the listing is now saved
    pub fn toggle_favorite<S: KeyValueStore>(
        &self,
        favorites: &mut FavoritesStore<S>,
    ) -> Result<bool, StorageError> {
        favorites.toggle(self.property.clone())
    }

    pub fn active_tab(&self) -> DetailTab {
        self.tabs.active()
    }

    pub fn select_tab(&mut self, index: usize) -> Result<DetailTab, TabError> {
        self.tabs.select(index)?;
        Ok(self.tabs.active())
    }

    pub fn tabs(&self) -> &TabState {
        &self.tabs
    }

    pub fn map(&self) -> &MapWidget {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapWidget {
        &mut self.map
    }
}

impl DragSource for PropertyDetails<'_> {
    fn drag_item(&self) -> DragItem {
        self.property.drag_item()
    }
}
