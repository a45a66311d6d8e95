//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use api::app::AppServices;
use api::config::{AppConfig, DEFAULT_LOG_FILTER, DeploymentMode};
use api::db;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let pool = match &config.database {
        Some(database) => {
            let pool = db::build_pool(database, config.deployment_mode)?;

            if config.deployment_mode == DeploymentMode::Server {
                // A database that is down now may come back; until then
                // every call falls back to memory.
                if let Err(e) = db::prepare(&pool).await {
                    tracing::warn!(
                        error = %format!("{e:#}"),
                        "Database not ready, continuing with in-memory fallback"
                    );
                }
            }
            Some(pool)
        }
        None => {
            tracing::info!("USE_DATABASE disabled, running on in-memory state only");
            None
        }
    };

    let services = AppServices::from_pool(pool.clone(), config.auth.clone());
    let app = services.router();

    tracing::info!(
        addr = %config.bind_addr,
        mode = ?config.deployment_mode,
        backend = ?services.store.backend(),
        "Listening"
    );

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Closed database pool");
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
