//! Item name to catalog key resolution
//!
//! Free-text names from the vision model are matched against an ordered rule
//! list with case-insensitive substring tests. The first matching rule wins,
//! so hardware rules sit above the generic `door` rule ("Door Closer" must not
//! price as a door) and `coffee` + `table` is required for a table match.

/// A rule matches when every group has at least one term present in the name
#[derive(Debug, Clone, Copy)]
pub struct ResolutionRule {
    pub all_of: &'static [&'static [&'static str]],
    pub key: &'static str,
}

impl ResolutionRule {
    fn matches(&self, lowered: &str) -> bool {
        self.all_of
            .iter()
            .all(|any_of| any_of.iter().any(|term| lowered.contains(term)))
    }
}

/// Resolution rules, evaluated top to bottom
pub const RESOLUTION_RULES: &[ResolutionRule] = &[
    ResolutionRule { all_of: &[&["closer"]], key: "door_closer" },
    ResolutionRule { all_of: &[&["handle", "pull"]], key: "hardware_set" },
    ResolutionRule { all_of: &[&["sofa"]], key: "sofa_3_seater" },
    ResolutionRule { all_of: &[&["table"], &["coffee"]], key: "coffee_table" },
    ResolutionRule { all_of: &[&["rug", "carpet"]], key: "area_rug" },
    ResolutionRule { all_of: &[&["curtain"]], key: "curtains_set" },
    ResolutionRule { all_of: &[&["light", "lamp"]], key: "ceiling_light" },
    ResolutionRule { all_of: &[&["floor"]], key: "flooring_sqft" },
    ResolutionRule { all_of: &[&["door"]], key: "commercial_door" },
    ResolutionRule { all_of: &[&["panel"], &["wall", "cladding"]], key: "wall_paneling_sqft" },
    ResolutionRule { all_of: &[&["ceiling"]], key: "acoustic_ceiling_sqft" },
    ResolutionRule { all_of: &[&["screen"], &["projection"]], key: "projector_screen" },
    ResolutionRule { all_of: &[&["speaker", "sensor", "device"]], key: "sensor_device" },
];

/// Map an extracted item name to its catalog key
pub fn resolve_catalog_key(item_name: &str) -> Option<&'static str> {
    let lowered = item_name.to_lowercase();
    RESOLUTION_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.key)
}
