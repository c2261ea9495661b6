pub mod storage;
pub mod store;

pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{FavoritesStore, FAVORITES_KEY};
