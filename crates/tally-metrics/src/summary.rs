//! Headline and per-tier progress composition.

use tally_models::{Catalog, PriorityTier, ProgressResult, StateSnapshot};

use crate::aggregate::aggregate;
use crate::filter::filter_tier;

/// Headline totals over the full, unfiltered catalog.
pub fn summarize(catalog: &Catalog, snapshot: &StateSnapshot) -> ProgressResult {
    aggregate(&catalog.sections, snapshot)
}

/// Progress for a single tier: filter first, then aggregate.
///
/// Feeds one gauge per tier. Items with an unrecognized priority appear in
/// no tier's result even though [`summarize`] counts them.
pub fn tier_progress(
    catalog: &Catalog,
    tier: PriorityTier,
    snapshot: &StateSnapshot,
) -> ProgressResult {
    aggregate(&filter_tier(&catalog.sections, tier), snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_models::{ChecklistItem, FlagMap, Section};

    fn flags(ids: &[&str]) -> FlagMap {
        ids.iter().map(|id| (id.to_string(), true)).collect()
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Section::new("Auth")
                .with_item(ChecklistItem::new("Use MFA", "recommended"))
                .with_item(ChecklistItem::new("Rotate Keys", "optional")),
            Section::new("Misc").with_item(ChecklistItem::new("Odd One", "someday")),
        ])
    }

    #[test]
    fn test_summarize_counts_everything() {
        let snapshot = StateSnapshot::new(flags(&["use-mfa"]), FlagMap::new());
        let progress = summarize(&sample_catalog(), &snapshot);

        // The unrecognized-priority item still counts toward the total.
        assert_eq!(progress, ProgressResult::new(1, 3));
    }

    #[test]
    fn test_summarize_empty_catalog() {
        let progress = summarize(&Catalog::default(), &StateSnapshot::default());
        assert_eq!(progress, ProgressResult::new(0, 0));
    }

    #[test]
    fn test_tier_progress_filters_first() {
        let snapshot = StateSnapshot::new(flags(&["use-mfa"]), FlagMap::new());
        let catalog = sample_catalog();

        assert_eq!(
            tier_progress(&catalog, PriorityTier::Recommended, &snapshot),
            ProgressResult::new(1, 1)
        );
        assert_eq!(
            tier_progress(&catalog, PriorityTier::Optional, &snapshot),
            ProgressResult::new(0, 1)
        );
        assert_eq!(
            tier_progress(&catalog, PriorityTier::Advanced, &snapshot),
            ProgressResult::new(0, 0)
        );
    }

    #[test]
    fn test_unrecognized_priority_in_no_tier() {
        let catalog = sample_catalog();
        let per_tier_total: usize = PriorityTier::ALL
            .iter()
            .map(|&tier| tier_progress(&catalog, tier, &StateSnapshot::default()).out_of)
            .sum();

        // Two of three items have a recognized tier.
        assert_eq!(per_tier_total, 2);
        assert_eq!(
            summarize(&catalog, &StateSnapshot::default()).out_of,
            3
        );
    }
}
