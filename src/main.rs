use ecommerce_orders::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environments set variables directly
    dotenv::dotenv().ok();

    // Missing required configuration is an unrecoverable startup fault
    let config = Config::from_env()?;

    init_logger(&config);

    tracing::info!(
        name = %config.service_name,
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "service details, starting the service"
    );

    // Opens the database and applies migrations before serving
    let state = ServerState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
