//! Catalog view handler.

use axum::{extract::State, Json};

use crate::error::Result;
use crate::state::AppState;
use crate::types::{CatalogResponse, SectionView};

/// GET /api/catalog - Sections with per-item flag state.
pub async fn get_catalog(State(state): State<AppState>) -> Result<Json<CatalogResponse>> {
    let snapshot = state.snapshot()?;

    let sections: Vec<SectionView> = state
        .catalog
        .sections
        .iter()
        .map(|section| SectionView::from_section(section, &snapshot))
        .collect();

    Ok(Json(CatalogResponse {
        total: state.catalog.item_count(),
        sections,
    }))
}
