//! Store Repository

use super::{RepoError, RepoResult};
use shared::models::{Store, StoreCreate, StoreUpdate};
use shared::schedule::{parse_schedule_json, UnifiedSchedule};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const STORE_COLUMNS: &str = "id, slug, name, whatsapp_number, address, \
     delivery_calculation_method, price_per_km, min_delivery_fee, \
     max_delivery_distance_km, manual_delivery_message, origin_lat, origin_lng, \
     is_active, created_at, updated_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Store>> {
    let stores = sqlx::query_as::<_, Store>(&format!(
        "SELECT {STORE_COLUMNS} FROM stores ORDER BY created_at"
    ))
    .fetch_all(pool)
    .await?;
    Ok(stores)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Store>> {
    let store = sqlx::query_as::<_, Store>(&format!(
        "SELECT {STORE_COLUMNS} FROM stores WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(store)
}

pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> RepoResult<Option<Store>> {
    let store = sqlx::query_as::<_, Store>(&format!(
        "SELECT {STORE_COLUMNS} FROM stores WHERE slug = ?"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;
    Ok(store)
}

pub async fn create(pool: &SqlitePool, data: StoreCreate) -> RepoResult<Store> {
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO stores (id, slug, name, whatsapp_number, address, created_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.slug)
    .bind(&data.name)
    .bind(&data.whatsapp_number)
    .bind(&data.address)
    .bind(now_millis())
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create store".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: StoreUpdate) -> RepoResult<Store> {
    let rows = sqlx::query(
        "UPDATE stores SET \
            name = COALESCE(?1, name), \
            whatsapp_number = COALESCE(?2, whatsapp_number), \
            address = COALESCE(?3, address), \
            delivery_calculation_method = COALESCE(?4, delivery_calculation_method), \
            price_per_km = COALESCE(?5, price_per_km), \
            min_delivery_fee = COALESCE(?6, min_delivery_fee), \
            max_delivery_distance_km = COALESCE(?7, max_delivery_distance_km), \
            manual_delivery_message = COALESCE(?8, manual_delivery_message), \
            origin_lat = COALESCE(?9, origin_lat), \
            origin_lng = COALESCE(?10, origin_lng), \
            is_active = COALESCE(?11, is_active), \
            updated_at = ?12 \
         WHERE id = ?13",
    )
    .bind(&data.name)
    .bind(&data.whatsapp_number)
    .bind(&data.address)
    .bind(data.delivery_calculation_method)
    .bind(data.price_per_km)
    .bind(data.min_delivery_fee)
    .bind(data.max_delivery_distance_km)
    .bind(&data.manual_delivery_message)
    .bind(data.origin_lat)
    .bind(data.origin_lng)
    .bind(data.is_active)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Store {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Store {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM stores WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Load a store's schedule through the single parse boundary.
///
/// A store that never saved a schedule reads as the all-closed default,
/// as does an unparsable blob.
pub async fn load_schedule(pool: &SqlitePool, store_id: i64) -> RepoResult<UnifiedSchedule> {
    let raw: Option<Option<String>> =
        sqlx::query_scalar("SELECT schedule_json FROM stores WHERE id = ?")
            .bind(store_id)
            .fetch_optional(pool)
            .await?;
    match raw {
        None => Err(RepoError::NotFound(format!("Store {store_id} not found"))),
        Some(None) => Ok(UnifiedSchedule::default()),
        Some(Some(json)) => Ok(parse_schedule_json(&json)),
    }
}

/// Replace a store's schedule wholesale
pub async fn save_schedule(
    pool: &SqlitePool,
    store_id: i64,
    schedule: &UnifiedSchedule,
) -> RepoResult<()> {
    let json = serde_json::to_string(schedule)
        .map_err(|e| RepoError::Validation(format!("Unserializable schedule: {e}")))?;
    let rows = sqlx::query("UPDATE stores SET schedule_json = ?, updated_at = ? WHERE id = ?")
        .bind(json)
        .bind(now_millis())
        .bind(store_id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Store {store_id} not found")));
    }
    Ok(())
}
