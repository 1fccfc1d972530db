//! Product Repository

use super::{RepoError, RepoResult};
use shared::models::{Product, ProductCreate, ProductUpdate};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

const PRODUCT_COLUMNS: &str = "id, store_id, category_id, name, description, image_url, \
     base_price, sort_order, is_active, variants, option_groups";

pub async fn find_all(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE store_id = ? ORDER BY sort_order, id"
    ))
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn find_active(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products \
         WHERE store_id = ? AND is_active = 1 ORDER BY sort_order, id"
    ))
    .bind(store_id)
    .fetch_all(pool)
    .await?;
    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(product)
}

pub async fn create(
    pool: &SqlitePool,
    store_id: i64,
    data: ProductCreate,
) -> RepoResult<Product> {
    if !data.base_price.is_finite() || data.base_price < 0.0 {
        return Err(RepoError::Validation(format!(
            "base_price must be a non-negative number, got {}",
            data.base_price
        )));
    }
    let id = snowflake_id();
    let variants = serde_json::to_string(&data.variants.unwrap_or_default())
        .map_err(|e| RepoError::Validation(format!("Unserializable variants: {e}")))?;
    let option_groups = serde_json::to_string(&data.option_groups.unwrap_or_default())
        .map_err(|e| RepoError::Validation(format!("Unserializable option groups: {e}")))?;
    sqlx::query(
        "INSERT INTO products (id, store_id, category_id, name, description, image_url, \
            base_price, sort_order, variants, option_groups) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(store_id)
    .bind(data.category_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(data.base_price)
    .bind(data.sort_order.unwrap_or(0))
    .bind(variants)
    .bind(option_groups)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ProductUpdate) -> RepoResult<Product> {
    if let Some(price) = data.base_price {
        if !price.is_finite() || price < 0.0 {
            return Err(RepoError::Validation(format!(
                "base_price must be a non-negative number, got {price}"
            )));
        }
    }
    let variants = data
        .variants
        .map(|v| serde_json::to_string(&v))
        .transpose()
        .map_err(|e| RepoError::Validation(format!("Unserializable variants: {e}")))?;
    let option_groups = data
        .option_groups
        .map(|g| serde_json::to_string(&g))
        .transpose()
        .map_err(|e| RepoError::Validation(format!("Unserializable option groups: {e}")))?;
    let rows = sqlx::query(
        "UPDATE products SET \
            category_id = COALESCE(?1, category_id), \
            name = COALESCE(?2, name), \
            description = COALESCE(?3, description), \
            image_url = COALESCE(?4, image_url), \
            base_price = COALESCE(?5, base_price), \
            sort_order = COALESCE(?6, sort_order), \
            is_active = COALESCE(?7, is_active), \
            variants = COALESCE(?8, variants), \
            option_groups = COALESCE(?9, option_groups) \
         WHERE id = ?10",
    )
    .bind(data.category_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(data.base_price)
    .bind(data.sort_order)
    .bind(data.is_active)
    .bind(variants)
    .bind(option_groups)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
