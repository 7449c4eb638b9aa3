//! Priority tiers for checklist items.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::ItemId;

/// Priority classification of a checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    /// Baseline items everyone should do.
    Recommended,
    /// Worthwhile but situational items.
    Optional,
    /// High-effort items for hardened setups.
    Advanced,
}

impl PriorityTier {
    /// All tiers, in radar presentation order.
    ///
    /// The order affects only how series are stacked in the dataset, not
    /// any computed value.
    pub const ALL: [PriorityTier; 3] = [
        PriorityTier::Advanced,
        PriorityTier::Optional,
        PriorityTier::Recommended,
    ];

    /// Parses a raw priority string from catalog data.
    ///
    /// Matching is case-insensitive after the same space-to-hyphen
    /// normalization applied to item ids. Anything that matches no tier
    /// returns `None`; such items belong to no tier view but still count
    /// toward overall totals.
    pub fn parse(raw: &str) -> Option<Self> {
        match ItemId::normalize(raw).as_str() {
            "recommended" => Some(PriorityTier::Recommended),
            "optional" => Some(PriorityTier::Optional),
            "advanced" => Some(PriorityTier::Advanced),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name of this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::Recommended => "recommended",
            PriorityTier::Optional => "optional",
            PriorityTier::Advanced => "advanced",
        }
    }

    /// Display label for gauges and series legends.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityTier::Recommended => "Recommended",
            PriorityTier::Optional => "Optional",
            PriorityTier::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!(
            PriorityTier::parse("recommended"),
            Some(PriorityTier::Recommended)
        );
        assert_eq!(PriorityTier::parse("optional"), Some(PriorityTier::Optional));
        assert_eq!(PriorityTier::parse("advanced"), Some(PriorityTier::Advanced));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            PriorityTier::parse("Recommended"),
            Some(PriorityTier::Recommended)
        );
        assert_eq!(PriorityTier::parse("ADVANCED"), Some(PriorityTier::Advanced));
    }

    #[test]
    fn test_parse_unknown_priority() {
        assert_eq!(PriorityTier::parse("critical"), None);
        assert_eq!(PriorityTier::parse(""), None);
    }

    #[test]
    fn test_radar_order() {
        assert_eq!(
            PriorityTier::ALL,
            [
                PriorityTier::Advanced,
                PriorityTier::Optional,
                PriorityTier::Recommended,
            ]
        );
    }

    #[test]
    fn test_tier_serialization() {
        let json = serde_json::to_string(&PriorityTier::Recommended).unwrap();
        assert_eq!(json, "\"recommended\"");

        let parsed: PriorityTier = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, PriorityTier::Advanced);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(PriorityTier::Optional.to_string(), "optional");
        assert_eq!(PriorityTier::Optional.label(), "Optional");
    }
}
