//! Products Repository
//!
//! Products are owned by orders; there is no standalone create. This
//! module serves the products list endpoint and the aggregate loaders.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::Product;

/// Retrieve up to `limit` products in store-default order
pub async fn list(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, order_id, name, price, quantity, status, remarks, updated_at FROM products LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(products)
}

/// Products belonging to a single order
pub async fn find_by_order(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, order_id, name, price, quantity, status, remarks, updated_at FROM products WHERE order_id = ?",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(products)
}
