//! Database pool lifecycle
//!
//! The pool is created lazily so a database that is down at startup does
//! not keep the server from serving: every call then fails fast and the
//! stores fall back to memory.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::{DEFAULT_DATABASE_NAME, DatabaseConfig, DeploymentMode};

pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
/// Server-side bound per statement, matching the per-operation timeout
pub const STATEMENT_TIMEOUT: &str = "10s";
const MAX_CONNECTIONS: u32 = 5;

/// Connection options from the URL, with the database name applied.
///
/// `DATABASE_NAME` wins over the URL; a URL without a database falls back
/// to the default name.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions> {
    let options = PgConnectOptions::from_str(&config.url)
        .context("DATABASE_URL is not a valid Postgres URL")?;

    let options = match (&config.name, options.get_database().is_some()) {
        (Some(name), _) => options.database(name),
        (None, true) => options,
        (None, false) => options.database(DEFAULT_DATABASE_NAME),
    };

    Ok(options.options([("statement_timeout", STATEMENT_TIMEOUT)]))
}

/// Build the pool for the given deployment mode. No connection is opened here.
pub fn build_pool(config: &DatabaseConfig, mode: DeploymentMode) -> Result<PgPool> {
    let options = connect_options(config)?;

    let pool_options = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT);

    let pool_options = match mode {
        DeploymentMode::Server => pool_options,
        DeploymentMode::Serverless => pool_options
            .min_connections(0)
            .idle_timeout(Some(Duration::from_secs(10)))
            .max_lifetime(Some(Duration::from_secs(60))),
    };

    Ok(pool_options.connect_lazy_with(options))
}

/// Ping and run migrations.
pub async fn prepare(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("Failed to connect to PostgreSQL database")?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, name: Option<&str>) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_database_name_override() {
        let options =
            connect_options(&config("postgres://u:p@db:5432/other", Some("api_switch"))).unwrap();
        assert_eq!(options.get_database(), Some("api_switch"));
    }

    #[test]
    fn test_url_database_kept() {
        let options = connect_options(&config("postgres://u:p@db:5432/other", None)).unwrap();
        assert_eq!(options.get_database(), Some("other"));
    }

    #[test]
    fn test_default_database_name() {
        let options = connect_options(&config("postgres://u:p@db:5432", None)).unwrap();
        assert_eq!(options.get_database(), Some(DEFAULT_DATABASE_NAME));
        assert_eq!(options.get_host(), "db");
    }

    #[test]
    fn test_invalid_url() {
        assert!(connect_options(&config("not a url", None)).is_err());
    }

    #[tokio::test]
    async fn test_lazy_pool_does_not_connect() {
        let pool = build_pool(
            &config("postgres://nobody@127.0.0.1:1/none", None),
            DeploymentMode::Serverless,
        )
        .unwrap();
        assert_eq!(pool.size(), 0);
    }
}
