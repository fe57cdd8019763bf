//! Products API Handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};

use crate::core::ServerState;
use crate::db::models::Product;
use crate::db::repository::{DEFAULT_PAGE_SIZE, product};
use crate::utils::{AppError, AppResult};

/// GET /ecommerce/v1/products?limit=N - List products
pub async fn get_all(
    State(state): State<ServerState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<Vec<Product>>> {
    let limit = match params.get("limit") {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| AppError::validation("Invalid limit parameter"))?,
        None => DEFAULT_PAGE_SIZE,
    };
    if limit < 0 {
        return Err(AppError::validation("Invalid limit parameter"));
    }

    let products = product::list(&state.pool, limit).await?;
    Ok(Json(products))
}
