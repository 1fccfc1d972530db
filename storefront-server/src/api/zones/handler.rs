//! Delivery Zone API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{DeliveryZone, DeliveryZoneCreate, DeliveryZoneUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::repository::{delivery_zone as zone_repo, store as store_repo};

async fn require_store(state: &ServerState, id: i64) -> AppResult<()> {
    store_repo::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StoreNotFound).with_detail("store_id", id))?;
    Ok(())
}

/// Zone routes are scoped under a store; reject cross-store ids
async fn require_zone(state: &ServerState, store_id: i64, zone_id: i64) -> AppResult<DeliveryZone> {
    zone_repo::find_by_id(&state.db.pool, zone_id)
        .await?
        .filter(|z| z.store_id == store_id)
        .ok_or_else(|| {
            AppError::new(ErrorCode::DeliveryZoneNotFound).with_detail("zone_id", zone_id)
        })
}

/// GET /api/stores/:id/zones
pub async fn list(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<DeliveryZone>>> {
    require_store(&state, id).await?;
    let zones = zone_repo::find_all(&state.db.pool, id).await?;
    Ok(Json(zones))
}

/// POST /api/stores/:id/zones
pub async fn create(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DeliveryZoneCreate>,
) -> AppResult<Json<DeliveryZone>> {
    require_store(&state, id).await?;
    if !payload.fixed_price.is_finite() || payload.fixed_price < 0.0 {
        return Err(AppError::validation("fixed_price must be a non-negative number"));
    }
    let zone = zone_repo::create(&state.db.pool, id, payload).await?;
    Ok(Json(zone))
}

/// PUT /api/stores/:id/zones/:zone_id
pub async fn update(
    State(state): State<ServerState>,
    Path((id, zone_id)): Path<(i64, i64)>,
    Json(payload): Json<DeliveryZoneUpdate>,
) -> AppResult<Json<DeliveryZone>> {
    require_zone(&state, id, zone_id).await?;
    let zone = zone_repo::update(&state.db.pool, zone_id, payload).await?;
    Ok(Json(zone))
}

/// DELETE /api/stores/:id/zones/:zone_id
pub async fn delete(
    State(state): State<ServerState>,
    Path((id, zone_id)): Path<(i64, i64)>,
) -> AppResult<Json<bool>> {
    require_zone(&state, id, zone_id).await?;
    let deleted = zone_repo::delete(&state.db.pool, zone_id).await?;
    Ok(Json(deleted))
}
