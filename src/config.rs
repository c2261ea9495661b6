//! Configuration loaded from environment variables with sensible defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Default directory for persisted favorites
pub const DEFAULT_STORE_DIR: &str = ".property-search";

#[derive(Clone)]
pub struct Config {
    /// Catalog JSON file; `None` uses the bundled dataset (PROPERTY_CATALOG)
    pub catalog_path: Option<PathBuf>,
    /// Where favorites are persisted (PROPERTY_STORE_DIR)
    pub store_dir: PathBuf,
    /// Enables the map tab when set (MAPS_API_KEY)
    pub maps_api_key: Option<String>,
    /// HTTP timeout for the map provider (MAPS_TIMEOUT_SECS, default: 30)
    pub maps_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("catalog_path", &self.catalog_path)
            .field("store_dir", &self.store_dir)
            .field("maps_api_key", &self.maps_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("maps_timeout", &self.maps_timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            maps_api_key: None,
            maps_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Load configuration from the process environment (after `.env`)
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            catalog_path: var("PROPERTY_CATALOG").map(PathBuf::from),
            store_dir: var("PROPERTY_STORE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_dir),
            maps_api_key: var("MAPS_API_KEY"),
            maps_timeout: var("MAPS_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.maps_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_map(&[]);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.store_dir, PathBuf::from(DEFAULT_STORE_DIR));
        assert!(config.maps_api_key.is_none());
        assert_eq!(config.maps_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = from_map(&[
            ("PROPERTY_CATALOG", "/data/listings.json"),
            ("PROPERTY_STORE_DIR", "/tmp/favs"),
            ("MAPS_API_KEY", "secret"),
            ("MAPS_TIMEOUT_SECS", "5"),
        ]);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/data/listings.json")));
        assert_eq!(config.store_dir, PathBuf::from("/tmp/favs"));
        assert_eq!(config.maps_api_key.as_deref(), Some("secret"));
        assert_eq!(config.maps_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = from_map(&[("MAPS_TIMEOUT_SECS", "soon"), ("MAPS_API_KEY", "  ")]);
        assert_eq!(config.maps_timeout, Duration::from_secs(30));
        assert!(config.maps_api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = from_map(&[("MAPS_API_KEY", "secret")]);
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
