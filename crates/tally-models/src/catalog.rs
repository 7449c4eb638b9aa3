//! Checklist catalog types.
//!
//! The catalog is read-only input to the metrics core: an ordered sequence
//! of sections, each holding an ordered checklist. Section order fixes the
//! radar axis order.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::tier::PriorityTier;

/// A single checklist entry.
///
/// The priority is kept as the raw catalog string: entries with an
/// unrecognized priority still deserialize and count toward overall
/// totals, they just never match any tier view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Display text, also the source of the item's normalized id.
    pub point: String,
    /// Raw priority string from the catalog.
    pub priority: String,
}

impl ChecklistItem {
    /// Creates a new checklist item.
    pub fn new(point: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            point: point.into(),
            priority: priority.into(),
        }
    }

    /// Normalized lookup id for this item.
    pub fn id(&self) -> ItemId {
        ItemId::normalize(&self.point)
    }

    /// The parsed tier, if the priority string matches one.
    pub fn tier(&self) -> Option<PriorityTier> {
        PriorityTier::parse(&self.priority)
    }
}

/// A named group of checklist items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section title, used as the radar axis label.
    pub title: String,
    /// Ordered checklist items.
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl Section {
    /// Creates a new empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            checklist: Vec::new(),
        }
    }

    /// Appends an item to the section checklist.
    pub fn with_item(mut self, item: ChecklistItem) -> Self {
        self.checklist.push(item);
        self
    }
}

/// The full ordered catalog of sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    /// Sections in display and radar axis order.
    pub sections: Vec<Section>,
}

impl Catalog {
    /// Creates a catalog from sections.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Total number of checklist items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.checklist.len()).sum()
    }

    /// Iterates over every item in catalog order.
    pub fn iter_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.sections.iter().flat_map(|s| s.checklist.iter())
    }

    /// Looks up an item by its normalized id.
    pub fn find_item(&self, id: &ItemId) -> Option<&ChecklistItem> {
        self.iter_items().find(|item| item.id() == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Section::new("Auth")
                .with_item(ChecklistItem::new("Use MFA", "recommended"))
                .with_item(ChecklistItem::new("Rotate Keys", "optional")),
            Section::new("Network").with_item(ChecklistItem::new("Use a VPN", "advanced")),
        ])
    }

    #[test]
    fn test_item_id_derivation() {
        let item = ChecklistItem::new("Use Strong Passwords", "recommended");
        assert_eq!(item.id().as_str(), "use-strong-passwords");
    }

    #[test]
    fn test_item_tier_parsing() {
        let item = ChecklistItem::new("Use MFA", "Recommended");
        assert_eq!(item.tier(), Some(PriorityTier::Recommended));

        let odd = ChecklistItem::new("Odd One", "someday");
        assert_eq!(odd.tier(), None);
    }

    #[test]
    fn test_catalog_item_count() {
        assert_eq!(sample_catalog().item_count(), 3);
        assert_eq!(Catalog::default().item_count(), 0);
    }

    #[test]
    fn test_catalog_find_item() {
        let catalog = sample_catalog();
        let found = catalog.find_item(&ItemId::from_string("rotate-keys"));
        assert_eq!(found.map(|i| i.point.as_str()), Some("Rotate Keys"));

        assert!(catalog.find_item(&ItemId::from_string("missing")).is_none());
    }

    #[test]
    fn test_catalog_serializes_as_array() {
        let json = serde_json::to_string(&sample_catalog()).unwrap();
        assert!(json.starts_with('['));

        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_catalog());
    }

    #[test]
    fn test_section_missing_checklist_defaults_empty() {
        let section: Section = serde_json::from_str(r#"{"title":"Empty"}"#).unwrap();
        assert!(section.checklist.is_empty());
    }

    #[test]
    fn test_unknown_priority_survives_deserialization() {
        let json = r#"[{"title":"S","checklist":[{"point":"X","priority":"critical"}]}]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.item_count(), 1);
        assert_eq!(catalog.sections[0].checklist[0].tier(), None);
    }
}
