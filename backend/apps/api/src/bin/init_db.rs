//! Database provisioning
//!
//! Creates the tables, the default admin account (Argon2-hashed) and the
//! initial toggle record. Safe to run repeatedly.

use anyhow::{Context, bail};
use api::config::{AppConfig, DEFAULT_LOG_FILTER};
use api::db;
use auth::PgCredentialRepository;
use auth::domain::Credential;
use platform::password::ClearTextPassword;
use toggle::PgApiStateRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let Some(database) = &config.database else {
        bail!("USE_DATABASE is disabled; nothing to initialize");
    };

    let pool = db::build_pool(database, config.deployment_mode)?;
    db::prepare(&pool).await?;

    let username = &config.auth.fallback_username;
    let hashed = ClearTextPassword::new(config.auth.fallback_password.clone())
        .hash()
        .context("Failed to hash default admin password")?;

    let credentials = PgCredentialRepository::new(pool.clone());
    if credentials
        .insert_if_absent(&Credential::new(username.as_str(), hashed))
        .await?
    {
        tracing::info!(username = %username, "Created default admin user");
        tracing::warn!("Change the default admin password in production");
    } else {
        tracing::info!(username = %username, "Admin user already exists");
    }

    let state = PgApiStateRepository::new(pool.clone());
    if state.init_if_absent().await? {
        tracing::info!("Initialized API state");
    } else {
        tracing::info!("API state already exists");
    }

    pool.close().await;
    tracing::info!("Database initialization complete");
    Ok(())
}
