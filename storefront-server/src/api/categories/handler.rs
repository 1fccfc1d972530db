//! Category API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::repository::{category as category_repo, RepoError, store as store_repo};

async fn require_store(state: &ServerState, id: i64) -> AppResult<()> {
    store_repo::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StoreNotFound).with_detail("store_id", id))?;
    Ok(())
}

async fn require_category(
    state: &ServerState,
    store_id: i64,
    category_id: i64,
) -> AppResult<Category> {
    category_repo::find_by_id(&state.db.pool, category_id)
        .await?
        .filter(|c| c.store_id == store_id)
        .ok_or_else(|| {
            AppError::new(ErrorCode::CategoryNotFound).with_detail("category_id", category_id)
        })
}

/// GET /api/stores/:id/categories
pub async fn list(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Category>>> {
    require_store(&state, id).await?;
    let categories = category_repo::find_all(&state.db.pool, id).await?;
    Ok(Json(categories))
}

/// POST /api/stores/:id/categories
pub async fn create(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    require_store(&state, id).await?;
    let category = category_repo::create(&state.db.pool, id, payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => {
                AppError::new(ErrorCode::CategoryNameExists).with_detail("store_id", id)
            }
            other => other.into(),
        })?;
    Ok(Json(category))
}

/// PUT /api/stores/:id/categories/:category_id
pub async fn update(
    State(state): State<ServerState>,
    Path((id, category_id)): Path<(i64, i64)>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    require_category(&state, id, category_id).await?;
    let category = category_repo::update(&state.db.pool, category_id, payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => {
                AppError::new(ErrorCode::CategoryNameExists).with_detail("store_id", id)
            }
            other => other.into(),
        })?;
    Ok(Json(category))
}

/// DELETE /api/stores/:id/categories/:category_id
pub async fn delete(
    State(state): State<ServerState>,
    Path((id, category_id)): Path<(i64, i64)>,
) -> AppResult<Json<bool>> {
    require_category(&state, id, category_id).await?;
    let deleted = category_repo::delete(&state.db.pool, category_id)
        .await
        .map_err(|e| match e {
            RepoError::Validation(_) => AppError::new(ErrorCode::CategoryHasProducts)
                .with_detail("category_id", category_id),
            other => other.into(),
        })?;
    Ok(Json(deleted))
}
