//! Domain model types

mod lenient;
pub mod catalog;
pub mod estimate;
pub mod vision;

pub use catalog::{Catalog, CatalogEntry};
pub use estimate::{CostEstimate, LineItem, TierEstimate};
pub use vision::{
    BuyingRecommendation, ComplexityFlags, ExtractedItem, QualityTierGuess, VisionAnalysis,
};
