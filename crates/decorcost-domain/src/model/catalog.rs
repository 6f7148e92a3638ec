//! Catalog type definitions

use std::collections::HashMap;

use decorcost_types::Tier;
use serde::{Deserialize, Serialize};

/// Unit prices of one catalog item, one per tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub economy: f64,
    #[serde(default)]
    pub standard: f64,
    #[serde(default)]
    pub premium: f64,
}

impl CatalogEntry {
    pub fn new(economy: f64, standard: f64, premium: f64) -> Self {
        Self {
            economy,
            standard,
            premium,
        }
    }

    /// Unit price for a tier
    pub fn price(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Economy => self.economy,
            Tier::Standard => self.standard,
            Tier::Premium => self.premium,
        }
    }
}

/// Read-only mapping from catalog key to unit prices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Empty catalog; every item resolves as unmapped against it
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key, for stable listings
    pub fn sorted_entries(&self) -> Vec<(&str, &CatalogEntry)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<String>> FromIterator<(K, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, CatalogEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
