//! Vision extraction output
//!
//! The shape produced by the external vision collaborator. Only `items` and
//! `complexity_flags` feed the estimator; the remaining fields are carried
//! through for reporting.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;

/// One element detected in the photograph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedItem {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,

    /// furniture | lighting | materials | decor | construction (advisory)
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default = "lenient::default_quantity", deserialize_with = "lenient::quantity")]
    pub quantity: u32,

    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub material_guess: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Default for ExtractedItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: None,
            quantity: lenient::default_quantity(),
            material_guess: None,
            notes: None,
            confidence: None,
        }
    }
}

impl ExtractedItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.max(1),
            ..Default::default()
        }
    }

    /// Build an item from an arbitrary JSON value.
    ///
    /// A bare string is taken as the item name; anything that is neither a
    /// string nor an object yields an unnamed item of quantity 1.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(name) => Self::new(name, 1),
            value @ Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// Costly construction features that raise the labor surcharge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityFlags {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub false_ceiling: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub wall_paneling: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub built_in_storage: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub custom_carpentry: bool,
}

impl ComplexityFlags {
    /// Flags in schema order with their names
    pub fn named(&self) -> [(&'static str, bool); 4] {
        [
            ("false_ceiling", self.false_ceiling),
            ("wall_paneling", self.wall_paneling),
            ("built_in_storage", self.built_in_storage),
            ("custom_carpentry", self.custom_carpentry),
        ]
    }
}

/// Finish quality guessed by the vision model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityTierGuess {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub tier: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub confidence: f64,
}

/// Where to source an item category cheaply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyingRecommendation {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub item_category: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub store_suggestion: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub price_tip: String,
}

/// Full vision extraction document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisionAnalysis {
    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub room_type: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub style_guess: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default", skip_serializing_if = "Option::is_none")]
    pub quality_tier_guess: Option<QualityTierGuess>,

    #[serde(default, deserialize_with = "items")]
    pub items: Vec<ExtractedItem>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub complexity_flags: ComplexityFlags,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub cost_saving_points: Vec<String>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub buying_recommendations: Vec<BuyingRecommendation>,
}

/// Item list where each record degrades on its own
fn items<'de, D>(deserializer: D) -> Result<Vec<ExtractedItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(values) => values.into_iter().map(ExtractedItem::from_value).collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_default() {
        let analysis: VisionAnalysis = serde_json::from_str("{}").unwrap();
        assert!(analysis.items.is_empty());
        assert_eq!(analysis.complexity_flags, ComplexityFlags::default());
    }

    #[test]
    fn test_malformed_item_does_not_abort_batch() {
        let analysis: VisionAnalysis = serde_json::from_str(
            r#"{
                "items": [
                    {"name": "Sofa", "quantity": 2},
                    {"quantity": "lots", "category": 7},
                    42,
                    "Floor Lamp",
                    {"name": null, "quantity": null}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(analysis.items.len(), 5);
        assert_eq!(analysis.items[0], ExtractedItem::new("Sofa", 2));
        assert_eq!(analysis.items[1].name, "");
        assert_eq!(analysis.items[1].quantity, 1);
        assert_eq!(analysis.items[1].category, None);
        assert_eq!(analysis.items[2], ExtractedItem::default());
        assert_eq!(analysis.items[3].name, "Floor Lamp");
        assert_eq!(analysis.items[4].name, "");
        assert_eq!(analysis.items[4].quantity, 1);
    }

    #[test]
    fn test_flags_partial_and_null() {
        let analysis: VisionAnalysis = serde_json::from_str(
            r#"{"complexity_flags": {"false_ceiling": true, "custom_carpentry": null}}"#,
        )
        .unwrap();
        assert!(analysis.complexity_flags.false_ceiling);
        assert!(!analysis.complexity_flags.custom_carpentry);
        assert!(!analysis.complexity_flags.wall_paneling);

        let analysis: VisionAnalysis = serde_json::from_str(
            r#"{"complexity_flags": {"false_ceiling": "yes", "built_in_storage": 0}}"#,
        )
        .unwrap();
        assert!(analysis.complexity_flags.false_ceiling);
        assert!(!analysis.complexity_flags.built_in_storage);

        let analysis: VisionAnalysis =
            serde_json::from_str(r#"{"complexity_flags": null, "items": null}"#).unwrap();
        assert_eq!(analysis.complexity_flags, ComplexityFlags::default());
        assert!(analysis.items.is_empty());
    }

    #[test]
    fn test_advisory_fields() {
        let analysis: VisionAnalysis = serde_json::from_str(
            r#"{
                "room_type": "Living Room",
                "quality_tier_guess": {"tier": "mid", "confidence": 0.7},
                "cost_saving_points": ["Skip the accent wall"],
                "buying_recommendations": [
                    {"item_category": "Rugs", "store_suggestion": "IKEA", "price_tip": "Wait for sales"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(analysis.room_type.as_deref(), Some("Living Room"));
        assert_eq!(analysis.quality_tier_guess.unwrap().tier, "mid");
        assert_eq!(analysis.cost_saving_points.len(), 1);
        assert_eq!(analysis.buying_recommendations[0].store_suggestion, "IKEA");
    }
}
