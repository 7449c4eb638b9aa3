//! Response DTOs for the API.

use serde::Serialize;

use tally_models::{ChecklistItem, PriorityTier, ProgressResult, Section, StateSnapshot};

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Headline progress response.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    /// Number of completed items.
    pub completed: usize,
    /// Number of eligible items.
    pub out_of: usize,
    /// Completion percentage; 0 when nothing is eligible.
    pub percent: f64,
}

impl From<ProgressResult> for ProgressResponse {
    fn from(progress: ProgressResult) -> Self {
        Self {
            completed: progress.completed,
            out_of: progress.out_of,
            percent: progress.percent(),
        }
    }
}

/// One per-tier gauge: a progress result plus the identifier and color the
/// renderer draws it with.
#[derive(Debug, Clone, Serialize)]
pub struct GaugeResponse {
    /// Gauge target identifier (the tier name).
    pub target: String,
    /// Display label.
    pub label: String,
    /// Number of completed items in the tier.
    pub completed: usize,
    /// Number of eligible items in the tier.
    pub out_of: usize,
    /// Completion percentage; 0 when nothing is eligible.
    pub percent: f64,
    /// Color hint for the renderer.
    pub color: String,
}

impl GaugeResponse {
    /// Builds a gauge for one tier.
    pub fn new(tier: PriorityTier, progress: ProgressResult) -> Self {
        Self {
            target: tier.as_str().to_string(),
            label: tier.label().to_string(),
            completed: progress.completed,
            out_of: progress.out_of,
            percent: progress.percent(),
            color: tier_color(tier).to_string(),
        }
    }
}

/// Per-tier gauge list response.
#[derive(Debug, Clone, Serialize)]
pub struct TierListResponse {
    /// One gauge per tier, in radar presentation order.
    pub tiers: Vec<GaugeResponse>,
}

/// Catalog view response: sections with per-item flag state.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    /// Sections in catalog order.
    pub sections: Vec<SectionView>,
    /// Total item count across all sections.
    pub total: usize,
}

/// A section with resolved item state.
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    /// Section title.
    pub title: String,
    /// Items in checklist order.
    pub items: Vec<ItemView>,
}

impl SectionView {
    /// Resolves a section against a flag snapshot.
    pub fn from_section(section: &Section, snapshot: &StateSnapshot) -> Self {
        Self {
            title: section.title.clone(),
            items: section
                .checklist
                .iter()
                .map(|item| ItemView::from_item(item, snapshot))
                .collect(),
        }
    }
}

/// A checklist item with resolved flag state.
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    /// Normalized id, the key for flag toggles.
    pub id: String,
    /// Display text.
    pub point: String,
    /// Raw priority string from the catalog.
    pub priority: String,
    /// Parsed tier; `None` for unrecognized priority strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<PriorityTier>,
    /// Whether the item is completed.
    pub completed: bool,
    /// Whether the item is ignored.
    pub ignored: bool,
}

impl ItemView {
    /// Resolves an item against a flag snapshot.
    pub fn from_item(item: &ChecklistItem, snapshot: &StateSnapshot) -> Self {
        let id = item.id();
        Self {
            completed: snapshot.completion.is_set(&id),
            ignored: snapshot.ignore.is_set(&id),
            id: id.as_str().to_string(),
            point: item.point.clone(),
            priority: item.priority.clone(),
            tier: item.tier(),
        }
    }
}

/// Generic success response.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    /// Success message.
    pub message: String,
}

/// Color hint for a tier, shared by gauges and radar series.
pub fn tier_color(tier: PriorityTier) -> &'static str {
    match tier {
        PriorityTier::Recommended => "#02c39a",
        PriorityTier::Optional => "#f29e4c",
        PriorityTier::Advanced => "#d90429",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_models::FlagMap;

    #[test]
    fn test_progress_response_from_result() {
        let response = ProgressResponse::from(ProgressResult::new(1, 2));
        assert_eq!(response.completed, 1);
        assert_eq!(response.out_of, 2);
        assert_eq!(response.percent, 50.0);
    }

    #[test]
    fn test_progress_response_zero_denominator() {
        let response = ProgressResponse::from(ProgressResult::new(0, 0));
        assert_eq!(response.percent, 0.0);
    }

    #[test]
    fn test_gauge_carries_tier_identity_and_color() {
        let gauge = GaugeResponse::new(PriorityTier::Advanced, ProgressResult::new(1, 4));
        assert_eq!(gauge.target, "advanced");
        assert_eq!(gauge.label, "Advanced");
        assert_eq!(gauge.percent, 25.0);
        assert_eq!(gauge.color, tier_color(PriorityTier::Advanced));
    }

    #[test]
    fn test_item_view_resolves_flags() {
        let item = ChecklistItem::new("Use MFA", "recommended");
        let mut completion = FlagMap::new();
        completion.set(&item.id(), true);
        let snapshot = StateSnapshot::new(completion, FlagMap::new());

        let view = ItemView::from_item(&item, &snapshot);
        assert_eq!(view.id, "use-mfa");
        assert!(view.completed);
        assert!(!view.ignored);
        assert_eq!(view.tier, Some(PriorityTier::Recommended));
    }

    #[test]
    fn test_item_view_unknown_tier_omitted_from_json() {
        let item = ChecklistItem::new("Odd One", "someday");
        let view = ItemView::from_item(&item, &StateSnapshot::default());

        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("tier"));
    }

    #[test]
    fn test_tier_colors_are_distinct() {
        let colors: Vec<_> = PriorityTier::ALL.iter().map(|&t| tier_color(t)).collect();
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
