//! Utility module - shared helpers and types
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - application result alias
//! - logging, time and validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
