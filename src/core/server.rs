//! Server Implementation
//!
//! Router assembly and HTTP server lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::middleware::logging::log_request;

// The service must only be started once per process
static STARTED: AtomicBool = AtomicBool::new(false);

/// Assemble the application router from the per-resource routers
pub fn build_app(config: &Config) -> Router<ServerState> {
    let mut app = Router::<ServerState>::new()
        .merge(crate::api::orders::router())
        .merge(crate::api::products::router())
        .merge(crate::api::status::router());

    if config.is_dev_mode() {
        app = app.merge(crate::api::seed::router());
    }

    app
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub async fn run(&self) -> Result<()> {
        if STARTED.swap(true, Ordering::SeqCst) {
            return Err(ServerError::AlreadyStarted);
        }

        let app = build_app(&self.config)
            .with_state(self.state.clone())
            .layer(CorsLayer::permissive())
            .layer(CompressionLayer::new())
            .layer(middleware::from_fn(log_request));

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            name = %self.config.service_name,
            environment = %self.config.environment,
            %addr,
            "service listening"
        );

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
