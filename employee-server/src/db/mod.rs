//! Database Module
//!
//! Handles the PostgreSQL connection pool and migrations

pub mod repository;

use crate::core::config::DatabaseConfig;
use crate::utils::{AppError, ErrorCode};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Database service, owns the PostgreSQL connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: PgPool,
}

impl DbService {
    /// Connect the pool and apply pending migrations
    pub async fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        let options = config
            .connect_options()
            .map_err(|e| AppError::with_message(ErrorCode::ConfigError, e.to_string()))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .max_lifetime(config.max_lifetime)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Database connection established"
        );

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}
