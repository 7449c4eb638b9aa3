//! Item flag toggle handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use tally_models::ItemId;
use tally_persistence::FlagKind;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{SetFlagRequest, SuccessResponse};

/// PUT /api/items/:id/completed - Set or clear an item's completion flag.
pub async fn set_completed(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetFlagRequest>,
) -> Result<Json<SuccessResponse>> {
    set_flag(&state, id, FlagKind::Completed, req.value)
}

/// PUT /api/items/:id/ignored - Set or clear an item's ignore flag.
pub async fn set_ignored(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetFlagRequest>,
) -> Result<Json<SuccessResponse>> {
    set_flag(&state, id, FlagKind::Ignored, req.value)
}

fn set_flag(
    state: &AppState,
    id: String,
    kind: FlagKind,
    value: bool,
) -> Result<Json<SuccessResponse>> {
    let id = ItemId::from_string(id);

    if state.catalog.find_item(&id).is_none() {
        return Err(ApiError::NotFound(format!("item not found: {}", id)));
    }

    state.flag_store.set(kind, &id, value)?;
    info!(item = %id, flag = %kind, value, "flag updated");

    Ok(Json(SuccessResponse {
        message: format!("{} set to {}", kind, value),
    }))
}
