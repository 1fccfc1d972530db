//! Public storefront handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use serde::Serialize;
use shared::models::{
    Category, DeliveryCalculationMethod, DeliveryZone, Product, Store,
};
use shared::schedule::{self, UnifiedSchedule};
use shared::{AppError, AppResult, ErrorCode};

use crate::checkout::{self, CheckoutOutcome, CheckoutRequest};
use crate::core::ServerState;
use crate::db::repository::{
    category as category_repo, delivery_zone as zone_repo, product as product_repo,
    store as store_repo,
};
use crate::delivery::{resolve_delivery_fee, DeliveryQuote, DeliveryRequest};

/// Store fields safe to show a customer
#[derive(Debug, Serialize)]
pub struct PublicStore {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub whatsapp_number: String,
    pub address: Option<String>,
    pub delivery_calculation_method: Option<DeliveryCalculationMethod>,
    pub manual_delivery_message: Option<String>,
}

impl From<&Store> for PublicStore {
    fn from(store: &Store) -> Self {
        Self {
            id: store.id,
            slug: store.slug.clone(),
            name: store.name.clone(),
            whatsapp_number: store.whatsapp_number.clone(),
            address: store.address.clone(),
            delivery_calculation_method: store.delivery_calculation_method,
            manual_delivery_message: store.manual_delivery_message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StorefrontView {
    pub store: PublicStore,
    pub open_now: bool,
    pub schedule: UnifiedSchedule,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub zones: Vec<DeliveryZone>,
}

async fn require_active_store(state: &ServerState, slug: &str) -> AppResult<Store> {
    let store = store_repo::find_by_slug(&state.db.pool, slug)
        .await?
        .ok_or_else(|| {
            AppError::new(ErrorCode::StoreNotFound).with_detail("slug", slug.to_string())
        })?;
    if !store.is_active {
        return Err(AppError::new(ErrorCode::StoreInactive).with_detail("slug", slug.to_string()));
    }
    Ok(store)
}

/// GET /api/storefront/:slug - the full public catalog
pub async fn catalog(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<StorefrontView>> {
    let store = require_active_store(&state, &slug).await?;
    let pool = &state.db.pool;

    let schedule = store_repo::load_schedule(pool, store.id).await?;
    let open_now = schedule::is_open_at(&schedule, Local::now().naive_local());
    let categories = category_repo::find_active(pool, store.id).await?;
    let products = product_repo::find_active(pool, store.id).await?;
    let zones = zone_repo::find_active(pool, store.id).await?;

    Ok(Json(StorefrontView {
        store: PublicStore::from(&store),
        open_now,
        schedule,
        categories,
        products,
        zones,
    }))
}

/// POST /api/storefront/:slug/delivery-quote
///
/// Quote-only; nothing is persisted. The same resolver runs again at
/// checkout with the authoritative subtotal.
pub async fn delivery_quote(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    Json(request): Json<DeliveryRequest>,
) -> AppResult<Json<DeliveryQuote>> {
    let store = require_active_store(&state, &slug).await?;
    let zones = zone_repo::find_active(&state.db.pool, store.id).await?;
    let quote = resolve_delivery_fee(&store, &zones, &request)?;
    Ok(Json(quote))
}

/// POST /api/storefront/:slug/checkout
pub async fn checkout(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
    Json(request): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutOutcome>> {
    let store = require_active_store(&state, &slug).await?;
    let outcome = checkout::submit(&state, &store, request).await?;
    Ok(Json(outcome))
}
