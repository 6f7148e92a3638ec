//! Domain layer for decorcost
//!
//! Typed records for vision output and cost breakdowns, the catalog, and the
//! pure services that turn one into the other.

pub mod model;
pub mod repository;
pub mod service;

pub use model::{Catalog, CatalogEntry, ComplexityFlags, CostEstimate, ExtractedItem, LineItem, TierEstimate, VisionAnalysis};
pub use service::{estimate, estimate_analysis, resolve_catalog_key};
