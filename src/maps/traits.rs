use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    #[error("Failed to load map script: {0}")]
    ScriptLoad(String),

    #[error("Geocoding failed: {0}")]
    Geocode(String),
}

/// A point on the map
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// External mapping service: a one-off script load followed by geocoding.
/// Neither call is retried.
#[async_trait]
pub trait MapProvider: Send + Sync {
    /// Load the provider's client script
    async fn load_script(&self) -> Result<(), MapError>;

    /// Resolve a free-text address to coordinates
    async fn geocode(&self, address: &str) -> Result<Coordinates, MapError>;

    /// Get the name of the mapping provider
    fn provider_name(&self) -> &'static str;
}
