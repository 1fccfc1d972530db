//! Order Repository
//!
//! Line and financial data are immutable after insert; only `status`
//! changes post-creation.

use super::{RepoError, RepoResult};
use shared::models::{Order, OrderStatus};
use shared::util::now_millis;
use sqlx::SqlitePool;

const ORDER_COLUMNS: &str = "id, store_id, order_number, customer_name, customer_phone, \
     delivery_method, delivery_address, delivery_zone_name, payment_method, cash_amount, \
     change_due, items, subtotal, delivery_fee, fee_pending, total, status, scheduled_for, \
     notes, created_at, updated_at";

pub async fn insert(pool: &SqlitePool, order: &Order) -> RepoResult<()> {
    let items = serde_json::to_string(&order.items)
        .map_err(|e| RepoError::Validation(format!("Unserializable order items: {e}")))?;
    sqlx::query(
        "INSERT INTO orders (id, store_id, order_number, customer_name, customer_phone, \
            delivery_method, delivery_address, delivery_zone_name, payment_method, \
            cash_amount, change_due, items, subtotal, delivery_fee, fee_pending, total, \
            status, scheduled_for, notes, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(order.id)
    .bind(order.store_id)
    .bind(&order.order_number)
    .bind(&order.customer_name)
    .bind(&order.customer_phone)
    .bind(order.delivery_method)
    .bind(&order.delivery_address)
    .bind(&order.delivery_zone_name)
    .bind(order.payment_method)
    .bind(order.cash_amount)
    .bind(order.change_due)
    .bind(items)
    .bind(order.subtotal)
    .bind(order.delivery_fee)
    .bind(order.fee_pending)
    .bind(order.total)
    .bind(order.status)
    .bind(&order.scheduled_for)
    .bind(&order.notes)
    .bind(order.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

pub async fn find_all(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE store_id = ? ORDER BY created_at DESC"
    ))
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: OrderStatus,
) -> RepoResult<Order> {
    let rows = sqlx::query("UPDATE orders SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status)
        .bind(now_millis())
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}
