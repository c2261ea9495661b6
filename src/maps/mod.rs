pub mod google;
pub mod mock;
pub mod traits;

pub use google::GoogleMapsProvider;
pub use mock::MockMapProvider;
pub use traits::{Coordinates, MapError, MapProvider};
