//! ShareHub Server: owner and share-link access to shared projects.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use sharehub_core::config::AppConfig;
use sharehub_core::error::AppError;
use sharehub_store::MemoryProjectStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("SHAREHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let mut config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.environment,
        "Starting ShareHub"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);

    let store = Arc::new(MemoryProjectStore::new());
    let state = sharehub_api::AppState::new(config, store)?;
    let app = sharehub_api::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "ShareHub server listening");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.await;
    });
    let handle = tokio::spawn(async move { server.await });

    shutdown_signal().await;
    tracing::info!("Shutdown signal received, starting graceful shutdown...");
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(grace, handle).await {
        Ok(Ok(result)) => result?,
        Ok(Err(e)) => return Err(AppError::internal(format!("Server task failed: {e}"))),
        Err(_) => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Graceful shutdown timed out"
            );
        }
    }

    tracing::info!("ShareHub server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
