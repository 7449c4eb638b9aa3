//! Priority filtering over catalog sections.

use tally_models::{PriorityTier, Section};

/// Narrows every section's checklist to items matching a tier.
///
/// Section count and order are always preserved, even when a section's
/// filtered checklist comes out empty; the radar builder relies on that
/// alignment. Items whose priority string matches no known tier match
/// nothing and are dropped from every tier view. Input is never mutated.
pub fn filter_tier(sections: &[Section], tier: PriorityTier) -> Vec<Section> {
    sections
        .iter()
        .map(|section| Section {
            title: section.title.clone(),
            checklist: section
                .checklist
                .iter()
                .filter(|item| item.tier() == Some(tier))
                .cloned()
                .collect(),
        })
        .collect()
}
