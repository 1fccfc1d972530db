//! Category Repository

use super::{RepoError, RepoResult};
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

const CATEGORY_COLUMNS: &str = "id, store_id, name, description, sort_order, is_active";

pub async fn find_all(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories WHERE store_id = ? ORDER BY sort_order, id"
    ))
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_active(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories \
         WHERE store_id = ? AND is_active = 1 ORDER BY sort_order, id"
    ))
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(&format!(
        "SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

pub async fn create(
    pool: &SqlitePool,
    store_id: i64,
    data: CategoryCreate,
) -> RepoResult<Category> {
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO categories (id, store_id, name, description, sort_order) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(store_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.sort_order.unwrap_or(0))
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create category".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CategoryUpdate) -> RepoResult<Category> {
    let rows = sqlx::query(
        "UPDATE categories SET \
            name = COALESCE(?1, name), \
            description = COALESCE(?2, description), \
            sort_order = COALESCE(?3, sort_order), \
            is_active = COALESCE(?4, is_active) \
         WHERE id = ?5",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Category {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Category {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
    if count > 0 {
        return Err(RepoError::Validation(
            "Cannot delete a category that still has products".into(),
        ));
    }
    let rows = sqlx::query("DELETE FROM categories WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
