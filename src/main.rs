//! Formation Sessions server binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use formation_sessions::adapters::http::{build_router, SessionAppState};
use formation_sessions::adapters::memory::{InMemoryInscriptionRepository, InMemorySessionRepository};
use formation_sessions::adapters::postgres::{
    connect, PostgresInscriptionRepository, PostgresSessionRepository,
};
use formation_sessions::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let state = match &config.database {
        Some(database) => {
            tracing::info!(url = %database.redacted_url(), "Connecting to PostgreSQL");
            let pool = connect(database).await?;
            SessionAppState::new(
                Arc::new(PostgresSessionRepository::new(pool.clone())),
                Arc::new(PostgresInscriptionRepository::new(pool)),
            )
        }
        None => {
            tracing::warn!("No database configured, sessions are kept in memory");
            SessionAppState::new(
                Arc::new(InMemorySessionRepository::new()),
                Arc::new(InMemoryInscriptionRepository::new()),
            )
        }
    };

    let router = build_router(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, environment = ?config.server.environment, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
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

    tracing::info!("Shutdown signal received");
}
