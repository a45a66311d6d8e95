//! Runtime configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use auth::AuthConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_DATABASE_NAME: &str = "api_switch";
pub const DEFAULT_LOG_FILTER: &str = "api=info,auth=info,toggle=info,tower_http=info";

/// How the pool is managed over the process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    /// Long-running process: connect and migrate at start, close on shutdown
    #[default]
    Server,
    /// Short-lived invocations: connections are opened per call
    Serverless,
}

impl FromStr for DeploymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" => Ok(Self::Server),
            "serverless" => Ok(Self::Serverless),
            other => Err(format!("unknown deployment mode: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Overrides the database named in `url`
    pub name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` when the persistent backend is disabled
    pub database: Option<DatabaseConfig>,
    pub deployment_mode: DeploymentMode,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let use_database = match get("USE_DATABASE") {
            Some(v) => parse_bool(&v).with_context(|| format!("USE_DATABASE={v}"))?,
            None => true,
        };

        let database = if use_database {
            let Some(url) = get("DATABASE_URL") else {
                bail!("DATABASE_URL must be set when USE_DATABASE is enabled");
            };
            Some(DatabaseConfig {
                url,
                name: get("DATABASE_NAME"),
            })
        } else {
            None
        };

        let deployment_mode = match get("DEPLOYMENT_MODE") {
            Some(v) => v.parse().map_err(anyhow::Error::msg)?,
            None => DeploymentMode::default(),
        };

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let mut auth = AuthConfig::default();
        if let Some(v) = get("COOKIE_SECURE") {
            auth = auth.with_secure_cookie(parse_bool(&v).with_context(|| format!("COOKIE_SECURE={v}"))?);
        }
        if let Some(v) = get("SESSION_TTL_SECS") {
            let secs: u64 = v.parse().context("SESSION_TTL_SECS must be a number of seconds")?;
            auth = auth.with_session_ttl(Duration::from_secs(secs));
        }
        if let (Some(username), Some(password)) =
            (get("FALLBACK_ADMIN_USERNAME"), get("FALLBACK_ADMIN_PASSWORD"))
        {
            auth = auth.with_fallback_account(username, password);
        }

        Ok(Self {
            bind_addr,
            database,
            deployment_mode,
            auth,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
