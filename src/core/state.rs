//! Server state
//!
//! [`ServerState`] is the shared state handed to every request handler.
//! It is a cheap `Clone`: the pool is internally reference counted.

use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;

#[derive(Clone)]
pub struct ServerState {
    /// Service configuration (immutable after startup)
    pub config: Config,
    /// SQLite connection pool, safe for concurrent use across requests
    pub pool: SqlitePool,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Open the database (running migrations) and assemble the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.db_path, config.log_queries).await?;
        Ok(Self::new(config.clone(), db.pool))
    }
}
