pub mod details;
pub mod drag;
pub mod listing;
pub mod map;
pub mod tabs;

pub use details::{DetailState, DetailView, GalleryImage, PropertyDetails, GALLERY_SIZE};
pub use drag::{DragItem, DragSource, DropOutcome, DropZone, DRAG_KIND_PROPERTY};
pub use listing::{ListingCard, SearchPage, NO_RESULTS_MESSAGE, NO_SAVED_MESSAGE};
pub use map::{MapState, MapWidget, Marker, MountToken, ViewLifetime};
pub use tabs::{DetailTab, SelectableTabs, TabError, TabState};
