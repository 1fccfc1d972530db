//! Store API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{Store, StoreCreate, StoreUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::repository::store as store_repo;

/// GET /api/stores - list all stores
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Store>>> {
    let stores = store_repo::find_all(&state.db.pool).await?;
    Ok(Json(stores))
}

/// GET /api/stores/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Store>> {
    let store = store_repo::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StoreNotFound).with_detail("store_id", id))?;
    Ok(Json(store))
}

/// POST /api/stores
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StoreCreate>,
) -> AppResult<Json<Store>> {
    validate_slug(&payload.slug)?;
    if store_repo::find_by_slug(&state.db.pool, &payload.slug)
        .await?
        .is_some()
    {
        return Err(
            AppError::new(ErrorCode::StoreSlugExists).with_detail("slug", payload.slug.clone())
        );
    }
    let store = store_repo::create(&state.db.pool, payload).await?;
    Ok(Json(store))
}

/// PUT /api/stores/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<StoreUpdate>,
) -> AppResult<Json<Store>> {
    let store = store_repo::update(&state.db.pool, id, payload).await?;
    Ok(Json(store))
}

/// DELETE /api/stores/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = store_repo::delete(&state.db.pool, id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::StoreNotFound).with_detail("store_id", id));
    }
    Ok(Json(true))
}

/// Slugs are lowercase alphanumerics and hyphens, addressable in a URL path
fn validate_slug(slug: &str) -> AppResult<()> {
    let ok = !slug.is_empty()
        && slug.len() <= 60
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-');
    if !ok {
        return Err(AppError::validation(format!("Invalid slug: {slug}")));
    }
    Ok(())
}
