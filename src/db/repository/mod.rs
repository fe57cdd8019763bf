//! Repository Module
//!
//! CRUD access to the orders aggregate. Repositories are free functions
//! over the shared [`sqlx::SqlitePool`]; all cross-table writes happen
//! inside a transaction.

pub mod order;
pub mod product;
pub mod seed;

use thiserror::Error;

/// Row cap applied when a list request carries no explicit limit
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
