//! Scripted map provider for tests and offline runs.

use crate::maps::traits::{Coordinates, MapError, MapProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns canned outcomes. Can be told to never finish a stage, which
/// lets callers exercise cancellation.
pub struct MockMapProvider {
    script: Result<(), MapError>,
    geocode: Result<Coordinates, MapError>,
    hang_on_script: bool,
    hang_on_geocode: bool,
    script_calls: AtomicUsize,
    geocode_calls: AtomicUsize,
}

impl MockMapProvider {
    /// Both stages succeed, every address resolves to `at`
    pub fn resolving_to(at: Coordinates) -> Self {
        Self {
            script: Ok(()),
            geocode: Ok(at),
            hang_on_script: false,
            hang_on_geocode: false,
            script_calls: AtomicUsize::new(0),
            geocode_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_script(reason: &str) -> Self {
        Self {
            script: Err(MapError::ScriptLoad(reason.to_string())),
            ..Self::default()
        }
    }

    pub fn failing_geocode(status: &str) -> Self {
        Self {
            geocode: Err(MapError::Geocode(status.to_string())),
            ..Self::default()
        }
    }

    pub fn hanging_on_script(mut self) -> Self {
        self.hang_on_script = true;
        self
    }

    pub fn hanging_on_geocode(mut self) -> Self {
        self.hang_on_geocode = true;
        self
    }

    pub fn script_calls(&self) -> usize {
        self.script_calls.load(Ordering::SeqCst)
    }

    pub fn geocode_calls(&self) -> usize {
        self.geocode_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockMapProvider {
    fn default() -> Self {
        Self::resolving_to(Coordinates {
            lat: 51.5074,
            lng: -0.1278,
        })
    }
}

#[async_trait]
impl MapProvider for MockMapProvider {
    async fn load_script(&self) -> Result<(), MapError> {
        self.script_calls.fetch_add(1, Ordering::SeqCst);
        if self.hang_on_script {
            std::future::pending::<()>().await;
        }
        self.script.clone()
    }

    async fn geocode(&self, _address: &str) -> Result<Coordinates, MapError> {
        self.geocode_calls.fetch_add(1, Ordering::SeqCst);
        if self.hang_on_geocode {
            std::future::pending::<()>().await;
        }
        self.geocode.clone()
    }

    fn provider_name(&self) -> &'static str {
        "Mock"
    }
}
