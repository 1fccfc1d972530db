//! Schedule API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::schedule::UnifiedSchedule;
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::repository::store as store_repo;

async fn require_store(state: &ServerState, id: i64) -> AppResult<()> {
    store_repo::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StoreNotFound).with_detail("store_id", id))?;
    Ok(())
}

/// GET /api/stores/:id/schedule
///
/// A store that never saved a schedule reads as the all-closed default.
pub async fn get_schedule(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<UnifiedSchedule>> {
    require_store(&state, id).await?;
    let schedule = store_repo::load_schedule(&state.db.pool, id).await?;
    Ok(Json(schedule))
}

/// PUT /api/stores/:id/schedule - wholesale replace
pub async fn replace_schedule(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(schedule): Json<UnifiedSchedule>,
) -> AppResult<Json<UnifiedSchedule>> {
    require_store(&state, id).await?;
    schedule.validate()?;
    store_repo::save_schedule(&state.db.pool, id, &schedule).await?;
    Ok(Json(schedule))
}
