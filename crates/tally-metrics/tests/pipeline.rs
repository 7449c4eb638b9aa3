//! End-to-end pipeline tests over a small catalog.

use tally_metrics::{aggregate, build_radar, filter_tier, summarize, tier_progress};
use tally_models::{
    Catalog, ChecklistItem, FlagMap, ItemId, PriorityTier, ProgressResult, Section, StateSnapshot,
};

fn auth_catalog() -> Catalog {
    Catalog::new(vec![Section::new("Auth")
        .with_item(ChecklistItem::new("Use MFA", "recommended"))
        .with_item(ChecklistItem::new("Rotate Keys", "optional"))])
}

fn mfa_done() -> StateSnapshot {
    let mut completion = FlagMap::new();
    completion.set(&ItemId::normalize("Use MFA"), true);
    StateSnapshot::new(completion, FlagMap::new())
}

#[test]
fn aggregate_counts_one_of_two() {
    let catalog = auth_catalog();
    let progress = aggregate(&catalog.sections, &mfa_done());

    assert_eq!(progress, ProgressResult::new(1, 2));
}

#[test]
fn recommended_filter_keeps_only_mfa() {
    let catalog = auth_catalog();
    let filtered = filter_tier(&catalog.sections, PriorityTier::Recommended);

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].checklist.len(), 1);
    assert_eq!(filtered[0].checklist[0].point, "Use MFA");
}

#[test]
fn radar_reflects_tier_completion() {
    let catalog = auth_catalog();
    let dataset = build_radar(&catalog.sections, &mfa_done());

    assert_eq!(dataset.labels, vec!["Auth".to_string()]);
    assert_eq!(
        dataset.series_for(PriorityTier::Recommended).unwrap().values,
        vec![100.0]
    );
    assert_eq!(
        dataset.series_for(PriorityTier::Optional).unwrap().values,
        vec![0.0]
    );
    assert_eq!(
        dataset.series_for(PriorityTier::Advanced).unwrap().values,
        vec![0.0]
    );
}

#[test]
fn summary_and_tier_gauges_agree_with_aggregate() {
    let catalog = auth_catalog();
    let snapshot = mfa_done();

    assert_eq!(
        summarize(&catalog, &snapshot),
        aggregate(&catalog.sections, &snapshot)
    );
    assert_eq!(
        tier_progress(&catalog, PriorityTier::Recommended, &snapshot),
        ProgressResult::new(1, 1)
    );
}

#[test]
fn everything_is_zero_safe_on_an_empty_catalog() {
    let catalog = Catalog::default();
    let snapshot = StateSnapshot::default();

    assert_eq!(summarize(&catalog, &snapshot), ProgressResult::new(0, 0));
    assert_eq!(summarize(&catalog, &snapshot).percent(), 0.0);

    let dataset = build_radar(&catalog.sections, &snapshot);
    assert!(dataset.labels.is_empty());
    assert!(dataset
        .series
        .iter()
        .all(|series| series.values.is_empty()));
}
