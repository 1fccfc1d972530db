//! Product API handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{Product, ProductCreate, ProductUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::repository::{category as category_repo, product as product_repo, store as store_repo};

async fn require_store(state: &ServerState, id: i64) -> AppResult<()> {
    store_repo::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StoreNotFound).with_detail("store_id", id))?;
    Ok(())
}

async fn require_product(
    state: &ServerState,
    store_id: i64,
    product_id: i64,
) -> AppResult<Product> {
    product_repo::find_by_id(&state.db.pool, product_id)
        .await?
        .filter(|p| p.store_id == store_id)
        .ok_or_else(|| {
            AppError::new(ErrorCode::ProductNotFound).with_detail("product_id", product_id)
        })
}

async fn require_category(state: &ServerState, store_id: i64, category_id: i64) -> AppResult<()> {
    category_repo::find_by_id(&state.db.pool, category_id)
        .await?
        .filter(|c| c.store_id == store_id)
        .ok_or_else(|| {
            AppError::new(ErrorCode::CategoryNotFound).with_detail("category_id", category_id)
        })?;
    Ok(())
}

/// GET /api/stores/:id/products
pub async fn list(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Product>>> {
    require_store(&state, id).await?;
    let products = product_repo::find_all(&state.db.pool, id).await?;
    Ok(Json(products))
}

/// GET /api/stores/:id/products/:product_id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path((id, product_id)): Path<(i64, i64)>,
) -> AppResult<Json<Product>> {
    let product = require_product(&state, id, product_id).await?;
    Ok(Json(product))
}

/// POST /api/stores/:id/products
pub async fn create(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    require_store(&state, id).await?;
    require_category(&state, id, payload.category_id).await?;
    if !payload.base_price.is_finite() || payload.base_price < 0.0 {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice)
            .with_detail("base_price", payload.base_price));
    }
    let product = product_repo::create(&state.db.pool, id, payload).await?;
    Ok(Json(product))
}

/// PUT /api/stores/:id/products/:product_id
pub async fn update(
    State(state): State<ServerState>,
    Path((id, product_id)): Path<(i64, i64)>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    require_product(&state, id, product_id).await?;
    if let Some(category_id) = payload.category_id {
        require_category(&state, id, category_id).await?;
    }
    if let Some(price) = payload.base_price {
        if !price.is_finite() || price < 0.0 {
            return Err(
                AppError::new(ErrorCode::ProductInvalidPrice).with_detail("base_price", price)
            );
        }
    }
    let product = product_repo::update(&state.db.pool, product_id, payload).await?;
    Ok(Json(product))
}

/// DELETE /api/stores/:id/products/:product_id
pub async fn delete(
    State(state): State<ServerState>,
    Path((id, product_id)): Path<(i64, i64)>,
) -> AppResult<Json<bool>> {
    require_product(&state, id, product_id).await?;
    let deleted = product_repo::delete(&state.db.pool, product_id).await?;
    Ok(Json(deleted))
}
