//! Domain services

pub mod catalog_resolver;
pub mod cost_estimator;

pub use catalog_resolver::{resolve_catalog_key, ResolutionRule, RESOLUTION_RULES};
pub use cost_estimator::{estimate, estimate_analysis, labor_percent, CONTINGENCY_PERCENT};
