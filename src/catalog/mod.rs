//! The static listing catalog, loaded once at startup and never mutated.

use crate::models::Property;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Dataset compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/properties.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate property id in catalog: {0}")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct CatalogDocument {
    properties: Vec<Property>,
}

/// Ordered, immutable collection of listings
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Build a catalog from already materialized listings
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(properties.len());
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                return Err(CatalogError::DuplicateId(property.id.clone()));
            }
        }
        Ok(Self { properties })
    }

    /// Parse a `{"properties": [...]}` document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.properties)
    }

    /// The dataset shipped with the crate
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load a catalog document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading catalog from {}", path.display());

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let catalog = Self::from_json(&json)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?;

        info!("Loaded {} properties from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
