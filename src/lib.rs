//! E-commerce Orders Service
//!
//! CRUD HTTP service for e-commerce orders with nested products and
//! update history, backed by SQLite.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/        # configuration, state, server, lifecycle errors
//! ├── api/         # HTTP routes and handlers
//! ├── db/          # pool, migrations, models, repositories
//! ├── middleware/  # request logging
//! └── utils/       # errors, logging setup, time, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export public types
pub use crate::core::server::build_app;
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use crate::utils::logger::{init_logger, init_logger_with_file};
pub use crate::utils::{AppError, AppResult};
