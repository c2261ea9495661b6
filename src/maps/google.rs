use crate::maps::traits::{Coordinates, MapError, MapProvider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";
const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const EMBED_URL: &str = "https://www.google.com/maps/embed/v1/place";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinates,
}

/// Google Maps JavaScript + Geocoding API client
pub struct GoogleMapsProvider {
    client: Client,
    api_key: String,
    script_url: String,
    geocode_url: String,
}

impl GoogleMapsProvider {
    /// Create a provider against the public Google endpoints
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_endpoints(api_key, timeout, SCRIPT_URL, GEOCODE_URL)
    }

    /// Create a provider against custom endpoints (proxies, test servers)
    pub fn with_endpoints(
        api_key: impl Into<String>,
        timeout: Duration,
        script_url: &str,
        geocode_url: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("property-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            script_url: script_url.to_string(),
            geocode_url: geocode_url.to_string(),
        })
    }

    /// Embeddable map page centred on an address
    pub fn embed_url(&self, address: &str) -> Result<Url> {
        Url::parse_with_params(EMBED_URL, &[("key", self.api_key.as_str()), ("q", address)])
            .context("Failed to build embed URL")
    }
}

#[async_trait]
impl MapProvider for GoogleMapsProvider {
    async fn load_script(&self) -> Result<(), MapError> {
        debug!("Loading map script from {}", self.script_url);

        let response = self
            .client
            .get(&self.script_url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| MapError::ScriptLoad(e.to_string()))?;

        if !response.status().is_success() {
            warn!("Map script returned status: {}", response.status());
            return Err(MapError::ScriptLoad(format!("HTTP {}", response.status())));
        }

        info!("Map script loaded");
        Ok(())
    }

    async fn geocode(&self, address: &str) -> Result<Coordinates, MapError> {
        debug!("Geocoding {:?}", address);

        let response: GeocodeResponse = self
            .client
            .get(&self.geocode_url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| MapError::Geocode(e.to_string()))?
            .json()
            .await
            .map_err(|e| MapError::Geocode(format!("malformed response: {}", e)))?;

        coordinates_from(response)
    }

    fn provider_name(&self) -> &'static str {
        "Google Maps"
    }
}

fn coordinates_from(response: GeocodeResponse) -> Result<Coordinates, MapError> {
    if response.status != "OK" {
        let reason = match response.error_message {
            Some(message) => format!("{} ({})", response.status, message),
            None => response.status,
        };
        warn!("Geocoder rejected request: {}", reason);
        return Err(MapError::Geocode(reason));
    }

    response
        .results
        .into_iter()
        .next()
        .map(|r| r.geometry.location)
        .ok_or_else(|| MapError::Geocode("ZERO_RESULTS".to_string()))
}
