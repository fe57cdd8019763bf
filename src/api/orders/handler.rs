//! Orders API Handlers
//!
//! Each handler binds its input, validates it is syntactically
//! well-formed, invokes the repository and maps the outcome onto an
//! HTTP status with a JSON body. Framework rejections are translated so
//! error bodies always carry the `{"error": ...}` shape.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderSave};
use crate::db::repository::{DEFAULT_PAGE_SIZE, order};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn parse_limit(params: &HashMap<String, String>) -> AppResult<i64> {
    let limit = match params.get("limit") {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| AppError::validation("Invalid limit parameter"))?,
        None => DEFAULT_PAGE_SIZE,
    };
    if limit < 0 {
        return Err(AppError::validation("Invalid limit parameter"));
    }
    Ok(limit)
}

fn parse_order_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::validation("Invalid order ID"))
}

fn validate_create(payload: &OrderCreate) -> AppResult<()> {
    if payload.products.is_empty() {
        return Err(AppError::validation("products must contain at least one product"));
    }
    for product in &payload.products {
        validate_required_text(&product.name, "name", MAX_NAME_LEN)?;
    }
    Ok(())
}

/// GET /ecommerce/v1/orders?limit=N - List orders
pub async fn get_all(
    State(state): State<ServerState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<Vec<Order>>> {
    let limit = parse_limit(&params)?;
    let orders = order::list(&state.pool, limit).await?;
    Ok(Json(orders))
}

/// GET /ecommerce/v1/orders/:id - Get an order aggregate by ID
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order_id = parse_order_id(&id)?;
    let order = order::get(&state.pool, order_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {order_id} not found")))?;
    Ok(Json(order))
}

/// POST /ecommerce/v1/orders - Create an order with its products
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> AppResult<Json<CreatedResponse>> {
    let Json(payload) = payload.map_err(|_| AppError::validation("Invalid input"))?;
    validate_create(&payload)?;

    let created = order::create(&state.pool, payload).await?;
    Ok(Json(CreatedResponse { id: created.id }))
}

/// PUT /ecommerce/v1/orders - Upsert an order by its ID
pub async fn update(
    State(state): State<ServerState>,
    payload: Result<Json<OrderSave>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(payload) = payload.map_err(|_| AppError::validation("Invalid input"))?;

    order::save(&state.pool, payload).await?;
    Ok(Json(MessageResponse {
        message: "Order updated successfully".into(),
    }))
}

/// DELETE /ecommerce/v1/orders/:id - Delete an order and its children
///
/// Idempotent: deleting an absent ID still reports success.
pub async fn delete_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let order_id = parse_order_id(&id)?;
    order::delete(&state.pool, order_id).await?;
    Ok(Json(MessageResponse {
        message: "Order deleted successfully".into(),
    }))
}
