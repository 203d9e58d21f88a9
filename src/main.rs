//! Cuedeck server — live stage-cue broadcast with a session-gated control
//! plane.
//!
//! Main entry point that wires the store, session gate, cue service, and
//! real-time registry together and starts the HTTP/WebSocket server.

use tracing_subscriber::{fmt, EnvFilter};

use cuedeck_api::{build_router, AppState};
use cuedeck_core::config::AppConfig;
use cuedeck_core::error::AppError;
use cuedeck_store::StoreManager;

#[tokio::main]
async fn main() {
    let env = std::env::var("CUEDECK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Cuedeck v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.admin_password.is_none() {
        tracing::warn!(
            "No admin password configured; logins will fail until CUEDECK__AUTH__ADMIN_PASSWORD is set"
        );
    }

    let store = StoreManager::new(&config.store).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store);
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when ctrl-c is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutdown signal received");
}
