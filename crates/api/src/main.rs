use std::sync::Arc;

use anyhow::Result;
use fittrack_api::{app, config, middleware};
use persistence::Store;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging)?;
    middleware::init_metrics()?;

    info!("Starting FitTrack API v{}", env!("CARGO_PKG_VERSION"));

    // Connect and provision up front so a bad database URL stops startup.
    let store = Arc::new(Store::sqlite(config.store_config()));
    store.ready().await?;

    let app = app::create_app(config.clone(), store.clone());

    let addr = config.socket_addr()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
