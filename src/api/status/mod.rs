//! Service status route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /status | GET | none |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Status router - public, no auth
pub fn router() -> Router<ServerState> {
    Router::new().route("/status", get(status))
}

#[derive(Serialize)]
pub struct StatusResponse {
    status: &'static str,
}

/// Liveness probe
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Service is running",
    })
}
