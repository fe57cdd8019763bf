//! Server lifecycle errors
//!
//! Faults raised during bootstrap and serving. Unlike [`AppError`],
//! these never become HTTP responses — they abort startup.
//!
//! [`AppError`]: crate::utils::AppError

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Service already started")]
    AlreadyStarted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for server lifecycle code
pub type Result<T> = std::result::Result<T, ServerError>;
