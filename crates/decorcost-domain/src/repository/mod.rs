//! Repository trait definitions

use crate::model::Catalog;

/// Source of catalog prices
///
/// Loading never fails: an unreadable or malformed resource yields an empty
/// catalog, and every item then prices as unmapped.
pub trait CatalogRepository {
    /// Load the catalog; cheap enough to call per request
    fn load(&self) -> Catalog;

    /// Human-readable origin of the catalog (path or "bundled")
    fn describe(&self) -> String;
}
