//! Radar dataset assembly.

use std::slice;

use tally_models::{PriorityTier, RadarDataset, RadarSeries, Section, StateSnapshot};

use crate::aggregate::aggregate;
use crate::filter::filter_tier;

/// Builds the multi-axis completion dataset: one axis per section, one
/// series per tier.
///
/// Each (section, tier) cell is computed independently (filter that one
/// section to the tier, aggregate it, take the percentage) and every cell
/// is assembled before the dataset is returned; there is no partial
/// result. Cells are pure functions of the same immutable snapshot, so
/// evaluation order carries no meaning. Series are stacked in the fixed
/// presentation order of [`PriorityTier::ALL`]; values align
/// index-for-index with `labels`.
pub fn build_radar(sections: &[Section], snapshot: &StateSnapshot) -> RadarDataset {
    let labels = sections.iter().map(|s| s.title.clone()).collect();

    let series = PriorityTier::ALL
        .iter()
        .map(|&tier| {
            let values = sections
                .iter()
                .map(|section| tier_percent(section, tier, snapshot))
                .collect();
            RadarSeries::new(tier, values).with_label(tier.label())
        })
        .collect();

    RadarDataset::new(labels, series)
}

/// Completion percentage for a single (section, tier) cell.
fn tier_percent(section: &Section, tier: PriorityTier, snapshot: &StateSnapshot) -> f64 {
    let narrowed = filter_tier(slice::from_ref(section), tier);
    aggregate(&narrowed, snapshot).percent()
}
