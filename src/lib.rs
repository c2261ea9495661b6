//! Property search: a static listing catalog, a form-driven filter over it,
//! persisted favorites, and the details page (gallery, tabs, map).

pub mod catalog;
pub mod config;
pub mod favorites;
pub mod maps;
pub mod models;
pub mod routes;
pub mod search;
pub mod views;

pub use catalog::Catalog;
pub use config::Config;
pub use favorites::{FavoritesStore, FileStore, KeyValueStore, MemoryStore, StorageError};
pub use models::{AddedDate, Property, PropertyType};
pub use routes::Route;
pub use search::{filter, SearchCriteria, SearchForm};
