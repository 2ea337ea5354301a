//! Trip Ledger HTTP host.
//!
//! Reads `engine.yaml` from the directory named by `TRIP_LEDGER_CONFIG`
//! (default `./config`) and serves the API on the configured address.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trip_ledger::api::{AppState, create_router};
use trip_ledger::config::ConfigLoader;

const CONFIG_DIR_ENV: &str = "TRIP_LEDGER_CONFIG";
const DEFAULT_CONFIG_DIR: &str = "./config";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let addr = config.server().bind_address();

    info!(
        config_dir = %config_dir,
        settings_path = %config.storage().settings_path,
        lifetime_path = %config.storage().lifetime_path,
        "Configuration loaded"
    );

    let app = create_router(AppState::from_config(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting server on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
