//! Catalog price loader from JSON or TOML resources

use std::fs;
use std::path::Path;

use decorcost_domain::model::Catalog;
use decorcost_types::{Error, Result};
use tracing::{debug, warn};

/// Catalog shipped with the binary
const BUNDLED_CATALOG: &str = include_str!("../data/catalog_prices.json");

/// Loads catalog prices from static resources
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog file; `.toml` files are read as TOML, anything else as JSON
    pub fn load_from_file(path: &Path) -> Result<Catalog> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let catalog = if is_toml {
            Self::load_from_toml_str(&content)?
        } else {
            Self::load_from_json_str(&content)?
        };
        debug!(path = %path.display(), entries = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Parse a JSON object of key -> {economy, standard, premium}
    pub fn load_from_json_str(content: &str) -> Result<Catalog> {
        serde_json::from_str(content)
            .map_err(|e| Error::Catalog(format!("Failed to parse catalog JSON: {}", e)))
    }

    /// Parse TOML with one table per catalog key
    pub fn load_from_toml_str(content: &str) -> Result<Catalog> {
        toml::from_str(content)
            .map_err(|e| Error::Catalog(format!("Failed to parse catalog TOML: {}", e)))
    }

    /// Load a catalog file, falling back to an empty catalog on any failure
    pub fn load_or_empty(path: &Path) -> Catalog {
        Self::load_from_file(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "catalog unavailable, pricing every item as unmapped");
            Catalog::empty()
        })
    }

    /// The catalog bundled into the binary
    pub fn bundled() -> Catalog {
        Self::load_from_json_str(BUNDLED_CATALOG).unwrap_or_else(|e| {
            warn!(error = %e, "bundled catalog is malformed");
            Catalog::empty()
        })
    }
}
