//! Service configuration
//!
//! All settings are environment-sourced:
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | DB_PATH | (required) | SQLite database file path |
//! | HTTP_PORT | 8080 | HTTP service port |
//! | SERVICE_NAME | ecommerce-orders | service name for startup log |
//! | ENVIRONMENT | local | local / dev enable the seed route |
//! | LOG_LEVEL | info | tracing filter directive |
//! | LOG_QUERIES | false | log every SQL statement at info |
//! | LOG_DIR | unset | daily-rolling file logs when set |
//!
//! A missing `DB_PATH` is an unrecoverable startup fault.

use crate::core::{Result, ServerError};

#[derive(Debug, Clone)]
pub struct Config {
    /// Service name, logged at startup
    pub service_name: String,
    /// HTTP API service port
    pub http_port: u16,
    /// SQLite database file path
    pub db_path: String,
    /// Runtime environment: local | dev | production
    pub environment: String,
    /// tracing filter directive
    pub log_level: String,
    /// Log every executed SQL statement
    pub log_queries: bool,
    /// Optional directory for rolling file logs
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let db_path = std::env::var("DB_PATH")
            .map_err(|_| ServerError::Config("DB_PATH must be defined".into()))?;

        Ok(Self {
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "ecommerce-orders".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_path,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_queries: std::env::var("LOG_QUERIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok(),
        })
    }

    /// Build a config directly, used by tests
    pub fn with_overrides(db_path: impl Into<String>, http_port: u16) -> Self {
        Self {
            service_name: "ecommerce-orders".into(),
            http_port,
            db_path: db_path.into(),
            environment: "local".into(),
            log_level: "info".into(),
            log_queries: false,
            log_dir: None,
        }
    }

    /// Dev mode gates the local seed route
    pub fn is_dev_mode(&self) -> bool {
        matches!(self.environment.as_str(), "local" | "dev" | "development")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
