//! The details page map tab: load the provider script, geocode the
//! listing's location, drop a marker. Both stages are abandoned as soon as
//! the owning view goes away.

use crate::maps::{Coordinates, MapError, MapProvider};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Owned by a view for as long as it is on screen
#[derive(Debug)]
pub struct ViewLifetime {
    mounted: watch::Sender<bool>,
}

/// Handed to async work started on behalf of a view
#[derive(Debug, Clone)]
pub struct MountToken {
    mounted: watch::Receiver<bool>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        let (mounted, _) = watch::channel(true);
        Self { mounted }
    }

    pub fn token(&self) -> MountToken {
        MountToken {
            mounted: self.mounted.subscribe(),
        }
    }

    /// Mark the view as gone. Dropping the lifetime has the same effect.
    pub fn unmount(&self) {
        self.mounted.send_replace(false);
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl MountToken {
    pub fn is_mounted(&self) -> bool {
        *self.mounted.borrow()
    }

    /// Resolves once the view is unmounted or its lifetime is dropped
    pub async fn unmounted(&mut self) {
        loop {
            if !*self.mounted.borrow_and_update() {
                return;
            }
            if self.mounted.changed().await.is_err() {
                return;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: Coordinates,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapState {
    Loading,
    Ready {
        coordinates: Coordinates,
        marker: Marker,
    },
    /// Terminal for this widget only; nothing is retried
    Failed(MapError),
    /// The view went away before the map finished
    Cancelled,
}

impl MapState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MapState::Loading)
    }
}

/// Map widget for one address
#[derive(Debug, Clone)]
pub struct MapWidget {
    address: String,
    state: MapState,
}

impl MapWidget {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            state: MapState::Loading,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn state(&self) -> &MapState {
        &self.state
    }

    /// Drive the widget to a terminal state. Runs at most once; later calls
    /// return the settled state untouched.
    pub async fn load(&mut self, provider: &dyn MapProvider, token: MountToken) -> &MapState {
        if !self.state.is_terminal() {
            self.state = resolve(provider, &self.address, token).await;
        }
        &self.state
    }
}

/// Script load, then a single geocode, each racing the view's unmount
pub async fn resolve(
    provider: &dyn MapProvider,
    address: &str,
    mut token: MountToken,
) -> MapState {
    if !token.is_mounted() {
        return MapState::Cancelled;
    }

    let loaded = tokio::select! {
        biased;
        _ = token.unmounted() => {
            debug!("View unmounted while loading {} script", provider.provider_name());
            return MapState::Cancelled;
        }
        result = provider.load_script() => result,
    };
    if let Err(e) = loaded {
        warn!("{}", e);
        return MapState::Failed(e);
    }

    let geocoded = tokio::select! {
        biased;
        _ = token.unmounted() => {
            debug!("View unmounted while geocoding {:?}", address);
            return MapState::Cancelled;
        }
        result = provider.geocode(address) => result,
    };

    match geocoded {
        Ok(coordinates) => {
            info!(
                "Placed marker for {:?} at {}, {}",
                address, coordinates.lat, coordinates.lng
            );
            MapState::Ready {
                coordinates,
                marker: Marker {
                    position: coordinates,
                    title: address.to_string(),
                },
            }
        }
        Err(e) => {
            warn!("{}", e);
            MapState::Failed(e)
        }
    }
}
