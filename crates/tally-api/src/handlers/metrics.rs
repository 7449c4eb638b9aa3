//! Progress, tier gauge, and radar dataset handlers.

use axum::{extract::State, Json};

use tally_metrics::{build_radar, summarize, tier_progress};
use tally_models::{PriorityTier, RadarDataset};

use crate::error::Result;
use crate::state::AppState;
use crate::types::{tier_color, GaugeResponse, ProgressResponse, TierListResponse};

/// GET /api/progress - Headline completed/eligible counts.
pub async fn get_progress(State(state): State<AppState>) -> Result<Json<ProgressResponse>> {
    let snapshot = state.snapshot()?;
    let progress = summarize(&state.catalog, &snapshot);

    Ok(Json(progress.into()))
}

/// GET /api/progress/tiers - One gauge per priority tier.
pub async fn get_tier_progress(State(state): State<AppState>) -> Result<Json<TierListResponse>> {
    let snapshot = state.snapshot()?;

    let tiers = PriorityTier::ALL
        .iter()
        .map(|&tier| GaugeResponse::new(tier, tier_progress(&state.catalog, tier, &snapshot)))
        .collect();

    Ok(Json(TierListResponse { tiers }))
}

/// GET /api/radar - The full radar dataset with renderer color hints.
pub async fn get_radar(State(state): State<AppState>) -> Result<Json<RadarDataset>> {
    let snapshot = state.snapshot()?;

    let mut dataset = build_radar(&state.catalog.sections, &snapshot);
    for series in &mut dataset.series {
        series.color = Some(tier_color(series.tier).to_string());
    }

    Ok(Json(dataset))
}
