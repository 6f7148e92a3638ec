//! Tiered cost estimation
//!
//! Every extracted item is listed once per tier, priced from the catalog when
//! its name resolves to a known key and at zero otherwise. Each tier then gets
//! a labor surcharge driven by the complexity flags and a flat contingency.

use decorcost_types::Tier;
use tracing::debug;

use crate::model::{Catalog, ComplexityFlags, CostEstimate, ExtractedItem, LineItem, TierEstimate, VisionAnalysis};
use crate::service::catalog_resolver::resolve_catalog_key;

/// Labor share with no complexity flags set
pub const BASE_LABOR_PERCENT: f64 = 0.10;
/// Added per surcharged complexity flag
pub const LABOR_PERCENT_STEP: f64 = 0.05;
/// Upper bound on the labor share
pub const MAX_LABOR_PERCENT: f64 = 0.25;
/// Contingency share, same for every tier
pub const CONTINGENCY_PERCENT: f64 = 0.10;

/// Labor share for a request.
///
/// `wall_paneling` is not surcharged.
pub fn labor_percent(flags: &ComplexityFlags) -> f64 {
    let surcharged = [
        flags.false_ceiling,
        flags.built_in_storage,
        flags.custom_carpentry,
    ]
    .into_iter()
    .filter(|set| *set)
    .count();

    labor_percent_for(surcharged)
}

/// Labor share for a number of surcharged features, capped
pub fn labor_percent_for(surcharged: usize) -> f64 {
    (0..surcharged)
        .fold(BASE_LABOR_PERCENT, |percent, _| percent + LABOR_PERCENT_STEP)
        .min(MAX_LABOR_PERCENT)
}

/// Price extracted items against the catalog for all three tiers
pub fn estimate(items: &[ExtractedItem], flags: &ComplexityFlags, catalog: &Catalog) -> CostEstimate {
    let mut lines: [Vec<LineItem>; 3] = Default::default();

    for item in items {
        let entry = resolve_catalog_key(&item.name).and_then(|key| catalog.get(key));
        if entry.is_none() {
            debug!(item = %item.name, "no catalog price for item");
        }

        for (tier, tier_lines) in Tier::ALL.into_iter().zip(lines.iter_mut()) {
            let line = match entry {
                Some(entry) => LineItem::priced(&item.name, item.quantity, entry.price(tier)),
                None => LineItem::unmapped(&item.name, item.quantity),
            };
            tier_lines.push(line);
        }
    }

    let labor_percent = labor_percent(flags);
    let [economy, standard, premium] =
        lines.map(|items| TierEstimate::from_items(items, labor_percent, CONTINGENCY_PERCENT));

    CostEstimate {
        economy,
        standard,
        premium,
    }
}

/// Estimate straight from a vision extraction document
pub fn estimate_analysis(analysis: &VisionAnalysis, catalog: &Catalog) -> CostEstimate {
    estimate(&analysis.items, &analysis.complexity_flags, catalog)
}
