//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `HERBAL_CATALOG_SOURCE` - Catalog JSON URL or file path (default: `products.json`)
//! - `HERBAL_STATE_DIR` - Directory for locally persisted state (default: `.herbal-store`)
//! - `HERBAL_CHECKOUT_DELAY_MS` - Simulated order processing time (default: 1000)
//!
//! Logging verbosity follows `RUST_LOG`, handled by the binary.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::catalog::CatalogSource;

const DEFAULT_CATALOG_SOURCE: &str = "products.json";
const DEFAULT_STATE_DIR: &str = ".herbal-store";
const DEFAULT_CHECKOUT_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Where the catalog document is read from
    pub catalog_source: CatalogSource,
    /// Directory backing the local key-value store
    pub state_dir: PathBuf,
    /// How long simulated order processing takes
    pub checkout_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_source: CatalogSource::File(PathBuf::from(DEFAULT_CATALOG_SOURCE)),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            checkout_delay: Duration::from_millis(DEFAULT_CHECKOUT_DELAY_MS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`StorefrontConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let source = lookup("HERBAL_CATALOG_SOURCE")
            .unwrap_or_else(|| DEFAULT_CATALOG_SOURCE.to_string());
        let catalog_source = CatalogSource::parse(&source).map_err(|e| {
            ConfigError::InvalidEnvVar("HERBAL_CATALOG_SOURCE".to_string(), e.to_string())
        })?;

        let state_dir = lookup("HERBAL_STATE_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_STATE_DIR), PathBuf::from);

        let checkout_delay = match lookup("HERBAL_CHECKOUT_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("HERBAL_CHECKOUT_DELAY_MS".to_string(), e.to_string())
            })?,
            None => DEFAULT_CHECKOUT_DELAY_MS,
        };

        Ok(Self {
            catalog_source,
            state_dir,
            checkout_delay: Duration::from_millis(checkout_delay),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("HERBAL_CATALOG_SOURCE", "https://cdn.example.com/products.json"),
            ("HERBAL_STATE_DIR", "/tmp/herbal"),
            ("HERBAL_CHECKOUT_DELAY_MS", " 250 "),
        ]))
        .unwrap();

        assert!(matches!(config.catalog_source, CatalogSource::Url(_)));
        assert_eq!(config.state_dir, PathBuf::from("/tmp/herbal"));
        assert_eq!(config.checkout_delay, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_delay() {
        let err = StorefrontConfig::from_lookup(lookup(&[("HERBAL_CHECKOUT_DELAY_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref name, _) if name == "HERBAL_CHECKOUT_DELAY_MS"));
    }

    #[test]
    fn test_invalid_catalog_url() {
        assert!(
            StorefrontConfig::from_lookup(lookup(&[("HERBAL_CATALOG_SOURCE", "https://")]))
                .is_err()
        );
    }
}
