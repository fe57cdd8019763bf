//! Development seed data
//!
//! Populates the database with a few sample orders. Reachable only
//! through the dev-mode seed endpoint.

use sqlx::SqlitePool;

use super::{RepoResult, order};
use crate::db::models::{OrderCreate, OrderStatus, ProductInput};

/// Insert sample orders for local development and testing
pub async fn seed_db(pool: &SqlitePool) -> RepoResult<()> {
    let samples = vec![
        OrderCreate {
            user: "alice".into(),
            total_amount: 120.50,
            status: Some(OrderStatus::Pending),
            products: vec![ProductInput {
                name: "Mechanical Keyboard".into(),
                price: 120.50,
                quantity: 1,
                status: String::new(),
                remarks: String::new(),
            }],
            updates: vec![],
        },
        OrderCreate {
            user: "bob".into(),
            total_amount: 75.20,
            status: Some(OrderStatus::Delivered),
            products: vec![ProductInput {
                name: "USB-C Dock".into(),
                price: 37.60,
                quantity: 2,
                status: String::new(),
                remarks: String::new(),
            }],
            updates: vec![],
        },
    ];

    for sample in samples {
        order::create(pool, sample).await?;
    }
    Ok(())
}
