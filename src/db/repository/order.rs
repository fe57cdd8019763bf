//! Orders Repository
//!
//! CRUD for the order aggregate. Creation and save write the parent row
//! and its nested products/updates as a single transaction; deletion
//! relies on FK cascade for the children.

use sqlx::SqlitePool;

use super::{RepoError, RepoResult, product};
use crate::db::models::{Order, OrderCreate, OrderSave, OrderUpdate, OrderUpdateInput, ProductInput};
use crate::utils::time::now_millis;

/// Create a new order with its nested products and updates
pub async fn create(pool: &SqlitePool, data: OrderCreate) -> RepoResult<Order> {
    let now = now_millis();
    let status = data.status.unwrap_or_default();

    let mut tx = pool.begin().await?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (version, created_at, updated_at, user, total_amount, status) VALUES (0, ?1, ?1, ?2, ?3, ?4) RETURNING id",
    )
    .bind(now)
    .bind(&data.user)
    .bind(data.total_amount)
    .bind(status)
    .fetch_one(&mut *tx)
    .await?;

    for input in &data.products {
        insert_product(&mut tx, id, input, now).await?;
    }
    for input in &data.updates {
        insert_update(&mut tx, id, input, now).await?;
    }

    tx.commit().await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order".into()))
}

/// Upsert an order by id
///
/// id 0 inserts a fresh order. An existing id is written with an
/// optimistic-lock check: the payload `version` must match the stored
/// one, and the stored version is bumped. A provided id with no
/// matching row is inserted as-is. Child sets are replaced wholesale
/// when the payload carries them.
pub async fn save(pool: &SqlitePool, data: OrderSave) -> RepoResult<Order> {
    let now = now_millis();

    let mut tx = pool.begin().await?;

    let id = if data.id > 0 {
        let result = sqlx::query(
            "UPDATE orders SET version = version + 1, updated_at = ?1, user = ?2, total_amount = ?3, status = COALESCE(?4, status) WHERE id = ?5 AND version = ?6",
        )
        .bind(now)
        .bind(&data.user)
        .bind(data.total_amount)
        .bind(data.status)
        .bind(data.id)
        .bind(data.version)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM orders WHERE id = ?)")
                    .bind(data.id)
                    .fetch_one(&mut *tx)
                    .await?;
            if exists {
                return Err(RepoError::Conflict(format!(
                    "Order {} was modified concurrently (stale version {})",
                    data.id, data.version
                )));
            }
            // Insert-or-replace semantics: an unknown id is inserted with that id
            sqlx::query(
                "INSERT INTO orders (id, version, created_at, updated_at, user, total_amount, status) VALUES (?1, 0, ?2, ?2, ?3, ?4, COALESCE(?5, 'OrderPending'))",
            )
            .bind(data.id)
            .bind(now)
            .bind(&data.user)
            .bind(data.total_amount)
            .bind(data.status)
            .execute(&mut *tx)
            .await?;
        }
        data.id
    } else {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO orders (version, created_at, updated_at, user, total_amount, status) VALUES (0, ?1, ?1, ?2, ?3, COALESCE(?4, 'OrderPending')) RETURNING id",
        )
        .bind(now)
        .bind(&data.user)
        .bind(data.total_amount)
        .bind(data.status)
        .fetch_one(&mut *tx)
        .await?
    };

    if let Some(products) = &data.products {
        sqlx::query("DELETE FROM products WHERE order_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for input in products {
            insert_product(&mut tx, id, input, now).await?;
        }
    }
    if let Some(updates) = &data.updates {
        sqlx::query("DELETE FROM order_updates WHERE order_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        for input in updates {
            insert_update(&mut tx, id, input, now).await?;
        }
    }

    tx.commit().await?;

    get(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Order {id} not found")))
}

/// Retrieve up to `limit` orders in store-default order, children populated
pub async fn list(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Order>> {
    let mut orders = sqlx::query_as::<_, Order>(
        "SELECT id, version, created_at, updated_at, user, total_amount, status FROM orders LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    for order in &mut orders {
        order.products = product::find_by_order(pool, order.id).await?;
        order.updates = find_updates(pool, order.id).await?;
    }
    Ok(orders)
}

/// Retrieve a single order aggregate by id
pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let mut order = sqlx::query_as::<_, Order>(
        "SELECT id, version, created_at, updated_at, user, total_amount, status FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if let Some(ref mut o) = order {
        o.products = product::find_by_order(pool, o.id).await?;
        o.updates = find_updates(pool, o.id).await?;
    }
    Ok(order)
}

/// Delete an order by id — idempotent, children cascade via FK
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Update history for a single order
pub async fn find_updates(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderUpdate>> {
    let updates = sqlx::query_as::<_, OrderUpdate>(
        "SELECT id, order_id, updated_at, notes, handled_by FROM order_updates WHERE order_id = ?",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(updates)
}

// ── Child inserts ───────────────────────────────────────────────────

async fn insert_product(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    order_id: i64,
    input: &ProductInput,
    now: i64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO products (order_id, name, price, quantity, status, remarks, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(order_id)
    .bind(&input.name)
    .bind(input.price)
    .bind(input.quantity)
    .bind(&input.status)
    .bind(&input.remarks)
    .bind(now)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

async fn insert_update(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    order_id: i64,
    input: &OrderUpdateInput,
    now: i64,
) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO order_updates (order_id, updated_at, notes, handled_by) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(order_id)
    .bind(now)
    .bind(&input.notes)
    .bind(&input.handled_by)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
