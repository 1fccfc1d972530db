//! Order API handlers
//!
//! Orders are created through the public checkout endpoint; here the store
//! owner lists them and advances their status.

use axum::{
    extract::{Path, State},
    Json,
};
use shared::models::{Order, OrderStatusUpdate};
use shared::{AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::db::repository::{order as order_repo, store as store_repo};

async fn require_store(state: &ServerState, id: i64) -> AppResult<()> {
    store_repo::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::StoreNotFound).with_detail("store_id", id))?;
    Ok(())
}

async fn require_order(state: &ServerState, store_id: i64, order_id: i64) -> AppResult<Order> {
    order_repo::find_by_id(&state.db.pool, order_id)
        .await?
        .filter(|o| o.store_id == store_id)
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", order_id))
}

/// GET /api/stores/:id/orders
pub async fn list(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Order>>> {
    require_store(&state, id).await?;
    let orders = order_repo::find_all(&state.db.pool, id).await?;
    Ok(Json(orders))
}

/// GET /api/stores/:id/orders/:order_id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path((id, order_id)): Path<(i64, i64)>,
) -> AppResult<Json<Order>> {
    let order = require_order(&state, id, order_id).await?;
    Ok(Json(order))
}

/// PUT /api/stores/:id/orders/:order_id/status
///
/// The lifecycle is forward-only; invalid transitions are rejected.
pub async fn update_status(
    State(state): State<ServerState>,
    Path((id, order_id)): Path<(i64, i64)>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = require_order(&state, id, order_id).await?;
    if !order.status.can_transition_to(payload.status) {
        return Err(AppError::new(ErrorCode::InvalidStatusTransition)
            .with_detail("from", format!("{:?}", order.status))
            .with_detail("to", format!("{:?}", payload.status)));
    }
    let updated = order_repo::update_status(&state.db.pool, order_id, payload.status).await?;
    Ok(Json(updated))
}
