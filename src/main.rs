//! Top-products service binary.

use anyhow::Context;
use product_aggregator::api::rest::{AppState, create_router};
use product_aggregator::infrastructure::config::AppConfig;
use product_aggregator::infrastructure::telemetry::init_tracing;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let config = AppConfig::load().context("loading configuration")?;
    init_tracing(&config.log)?;

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "ignoring unreadable .env file");
        }
    }

    let state = AppState::from_config(&config).context("building catalog client")?;
    let router = create_router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;

    info!(
        address = %address,
        companies = ?config.catalog.companies,
        upstream = %config.catalog.base_url,
        timeout_ms = config.catalog.timeout_ms,
        page_size = config.pagination.page_size,
        "server started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
