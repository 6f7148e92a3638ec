//! Cost breakdown type definitions

use decorcost_types::Tier;
use serde::{Deserialize, Serialize};

/// Suffix appended to items that have no catalog price
pub const NOT_IN_CATALOG_SUFFIX: &str = " (Not in catalog)";

/// One priced row of a tier breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub cost: f64,
}

impl LineItem {
    pub fn priced(name: &str, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit_price,
            cost: unit_price * f64::from(quantity),
        }
    }

    /// Zero-cost row kept for transparency
    pub fn unmapped(name: &str, quantity: u32) -> Self {
        Self {
            name: format!("{}{}", name, NOT_IN_CATALOG_SUFFIX),
            quantity,
            unit_price: 0.0,
            cost: 0.0,
        }
    }

    pub fn is_unmapped(&self) -> bool {
        self.name.ends_with(NOT_IN_CATALOG_SUFFIX) && self.unit_price == 0.0
    }
}

/// Breakdown for a single tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierEstimate {
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    /// Truncated, whole currency units
    pub labor: i64,
    /// Truncated, whole currency units
    pub contingency: i64,
    pub total: f64,
    pub labor_percent: f64,
    pub contingency_percent: f64,
}

impl TierEstimate {
    /// Sum the line items and apply both surcharges.
    ///
    /// Surcharges are truncated toward zero, never rounded up.
    pub fn from_items(items: Vec<LineItem>, labor_percent: f64, contingency_percent: f64) -> Self {
        let subtotal: f64 = items.iter().map(|item| item.cost).sum();
        let labor = (subtotal * labor_percent).trunc() as i64;
        let contingency = (subtotal * contingency_percent).trunc() as i64;

        Self {
            items,
            subtotal,
            labor,
            contingency,
            total: subtotal + labor as f64 + contingency as f64,
            labor_percent,
            contingency_percent,
        }
    }
}

/// Economy / standard / premium breakdowns for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub economy: TierEstimate,
    pub standard: TierEstimate,
    pub premium: TierEstimate,
}

impl CostEstimate {
    pub fn tier(&self, tier: Tier) -> &TierEstimate {
        match tier {
            Tier::Economy => &self.economy,
            Tier::Standard => &self.standard,
            Tier::Premium => &self.premium,
        }
    }

    /// Tiers in presentation order
    pub fn tiers(&self) -> [(Tier, &TierEstimate); 3] {
        Tier::ALL.map(|tier| (tier, self.tier(tier)))
    }
}
