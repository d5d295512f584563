//! Server configuration
//!
//! Values come from the process environment; `.env` is loaded first by
//! `main` through `dotenvy`, and real environment variables win.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | DATABASE_URL | - | Full PostgreSQL URL (takes precedence over DB_*) |
//! | DB_HOST / DB_PORT | - / 5432 | PostgreSQL host and port |
//! | DB_USERNAME / DB_PASSWORD | - / empty | Credentials |
//! | DB_NAME | - | Database name |
//! | DB_TZ | - | Session `TimeZone` |
//! | DB_MAX_CONNECTIONS | 25 | Pool upper bound |
//! | DB_MIN_CONNECTIONS | 5 | Idle connections kept open |
//! | DB_MAX_LIFETIME_SECS | 300 | Connection lifetime |
//! | DB_ACQUIRE_TIMEOUT_SECS | 5 | Wait for a pooled connection |
//! | HTTP_PORT | 5000 | HTTP listen port |
//! | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
//! | ENVIRONMENT | development | development / staging / production |
//! | LOG_LEVEL | info | Default tracing filter |
//! | LOG_JSON | false | JSON log lines |

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

/// Maximum accepted request body (1 MiB)
pub const MAX_BODY_BYTES: usize = 1 << 20;

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Database connection and pool settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full URL; when set, the DB_* parts are ignored
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: u16,
    pub username: Option<String>,
    pub password: String,
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Build sqlx connect options from the URL or the individual parts
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let mut options = match &self.url {
            Some(url) => url.parse::<PgConnectOptions>().map_err(|_| ConfigError::Invalid {
                name: "DATABASE_URL",
                value: "<redacted>".into(),
            })?,
            None => {
                let host = self.host.as_deref().ok_or(ConfigError::Missing("DB_HOST"))?;
                let username = self
                    .username
                    .as_deref()
                    .ok_or(ConfigError::Missing("DB_USERNAME"))?;
                let name = self.name.as_deref().ok_or(ConfigError::Missing("DB_NAME"))?;
                PgConnectOptions::new()
                    .host(host)
                    .port(self.port)
                    .username(username)
                    .password(&self.password)
                    .database(name)
                    .ssl_mode(PgSslMode::Disable)
            }
        };

        if let Some(tz) = &self.timezone {
            options = options.options([("TimeZone", tz.as_str())]);
        }
        Ok(options)
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    /// HTTP API port
    pub http_port: u16,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// development | staging | production
    pub environment: String,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let parsed = |key: &str| var(key).and_then(|v| v.parse::<u64>().ok());

        let port = match var("DB_PORT") {
            Some(p) => p.parse().map_err(|_| ConfigError::Invalid {
                name: "DB_PORT",
                value: p,
            })?,
            None => 5432,
        };

        let database = DatabaseConfig {
            url: var("DATABASE_URL"),
            host: var("DB_HOST"),
            port,
            username: var("DB_USERNAME"),
            password: var("DB_PASSWORD").unwrap_or_default(),
            name: var("DB_NAME"),
            timezone: var("DB_TZ"),
            max_connections: parsed("DB_MAX_CONNECTIONS").map_or(25, |v| v as u32),
            min_connections: parsed("DB_MIN_CONNECTIONS").map_or(5, |v| v as u32),
            max_lifetime: Duration::from_secs(parsed("DB_MAX_LIFETIME_SECS").unwrap_or(300)),
            acquire_timeout: Duration::from_secs(parsed("DB_ACQUIRE_TIMEOUT_SECS").unwrap_or(5)),
        };

        Ok(Self {
            database,
            http_port: var("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            request_timeout: Duration::from_secs(parsed("REQUEST_TIMEOUT_SECS").unwrap_or(30)),
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: var("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }
}
