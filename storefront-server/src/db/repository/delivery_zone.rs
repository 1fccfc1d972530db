//! Delivery Zone Repository

use super::{RepoError, RepoResult};
use shared::models::{DeliveryZone, DeliveryZoneCreate, DeliveryZoneUpdate};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

const ZONE_COLUMNS: &str = "id, store_id, name, fixed_price, free_delivery_threshold, \
     estimated_time_minutes, description, sort_order, is_active";

pub async fn find_all(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<DeliveryZone>> {
    let zones = sqlx::query_as::<_, DeliveryZone>(&format!(
        "SELECT {ZONE_COLUMNS} FROM delivery_zones WHERE store_id = ? ORDER BY sort_order, id"
    ))
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(zones)
}

/// Active zones only, the set a customer may select from
pub async fn find_active(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<DeliveryZone>> {
    let zones = sqlx::query_as::<_, DeliveryZone>(&format!(
        "SELECT {ZONE_COLUMNS} FROM delivery_zones \
         WHERE store_id = ? AND is_active = 1 ORDER BY sort_order, id"
    ))
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(zones)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<DeliveryZone>> {
    let zone = sqlx::query_as::<_, DeliveryZone>(&format!(
        "SELECT {ZONE_COLUMNS} FROM delivery_zones WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(zone)
}

pub async fn create(
    pool: &SqlitePool,
    store_id: i64,
    data: DeliveryZoneCreate,
) -> RepoResult<DeliveryZone> {
    let id = snowflake_id();
    let sort_order = match data.sort_order {
        Some(order) => order,
        // append at the end of the customer-facing list
        None => {
            let max: Option<i64> = sqlx::query_scalar(
                "SELECT MAX(sort_order) FROM delivery_zones WHERE store_id = ?",
            )
            .bind(store_id)
            .fetch_one(pool)
            .await?;
            max.map_or(0, |m| m + 1)
        }
    };
    sqlx::query(
        "INSERT INTO delivery_zones (id, store_id, name, fixed_price, \
            free_delivery_threshold, estimated_time_minutes, description, sort_order) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(store_id)
    .bind(&data.name)
    .bind(data.fixed_price)
    .bind(data.free_delivery_threshold)
    .bind(data.estimated_time_minutes)
    .bind(&data.description)
    .bind(sort_order)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create delivery zone".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: DeliveryZoneUpdate,
) -> RepoResult<DeliveryZone> {
    let rows = sqlx::query(
        "UPDATE delivery_zones SET \
            name = COALESCE(?1, name), \
            fixed_price = COALESCE(?2, fixed_price), \
            free_delivery_threshold = COALESCE(?3, free_delivery_threshold), \
            estimated_time_minutes = COALESCE(?4, estimated_time_minutes), \
            description = COALESCE(?5, description), \
            sort_order = COALESCE(?6, sort_order), \
            is_active = COALESCE(?7, is_active) \
         WHERE id = ?8",
    )
    .bind(&data.name)
    .bind(data.fixed_price)
    .bind(data.free_delivery_threshold)
    .bind(data.estimated_time_minutes)
    .bind(&data.description)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Delivery zone {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Delivery zone {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    // historical orders keep their snapshot fee; no reference check needed
    let rows = sqlx::query("DELETE FROM delivery_zones WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
