//! Orders API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Orders router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/ecommerce/v1/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::get_all)
                .post(handler::create)
                .put(handler::update),
        )
        .route("/{id}", get(handler::get_by_id).delete(handler::delete_by_id))
}
