//! Products API Module
//!
//! Products are created and updated only through their owning order;
//! this surface is read-only.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Products router
pub fn router() -> Router<ServerState> {
    Router::new().route("/ecommerce/v1/products", get(handler::get_all))
}
