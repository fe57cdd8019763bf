//! Dev-mode database seeding
//!
//! Only merged into the router when the service runs in a development
//! environment (see [`Config::is_dev_mode`]).
//!
//! [`Config::is_dev_mode`]: crate::core::Config::is_dev_mode

use axum::{Json, Router, extract::State, routing::post};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::seed;
use crate::utils::AppResult;

/// Seed router - dev environments only
pub fn router() -> Router<ServerState> {
    Router::new().route("/internal/seed-local-db", post(seed_db))
}

#[derive(Serialize)]
pub struct SeedResponse {
    message: &'static str,
}

/// POST /internal/seed-local-db - Populate the database with sample orders
pub async fn seed_db(State(state): State<ServerState>) -> AppResult<Json<SeedResponse>> {
    seed::seed_db(&state.pool).await?;
    Ok(Json(SeedResponse {
        message: "Database seeded successfully",
    }))
}
