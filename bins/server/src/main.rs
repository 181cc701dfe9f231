//! walletd API Server
//!
//! Main entry point for the wallet ledger service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use walletd_api::{AdmissionGate, AppState, create_router};
use walletd_db::{WalletRepository, connect, migrate};
use walletd_shared::{AppConfig, AppError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walletd=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()
        .inspect_err(log_startup_error)
        .context("Failed to load configuration")?;

    let db = connect(&config.database).await.inspect_err(log_startup_error)?;
    info!("Connected to database");

    migrate(&db).await.inspect_err(log_startup_error)?;
    info!("Schema is up to date");

    let gate = AdmissionGate::from_config(&config.gateway);
    info!(
        max_in_flight = gate.capacity(),
        acquire_timeout_ms = ?config.gateway.acquire_timeout_ms,
        "Admission gate configured"
    );

    let state = AppState::new(Arc::new(WalletRepository::new(db)), gate);
    let gate = Arc::clone(&state.gate);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(gate))
        .await?;

    info!("Server stopped");
    Ok(())
}

fn log_startup_error(e: &AppError) {
    error!(code = e.error_code(), error = %e, "Startup failed");
}

/// Resolves on Ctrl-C, then closes the gate so queued operations get a 503
/// while admitted ones finish.
async fn shutdown_signal(gate: Arc<AdmissionGate>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    gate.close();
    info!(in_flight = gate.in_flight(), "Shutdown signal received, draining in-flight requests");
}
