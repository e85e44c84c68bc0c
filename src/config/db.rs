// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup the PostgreSQL connection pool and apply the schema

use crate::config::Config;
use crate::errors::BnbError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Pool options shared by the eager and lazy constructors
fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        // Maximum concurrent connections
        .max_connections(config.db_max_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
}

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Connects eagerly and verifies the store answers
/// Called once during application startup
pub async fn init_db_pool(config: &Config) -> Result<PgPool, BnbError> {
    log::info!("Initializing database pool: {}", config.redacted_url());

    let pool = pool_options(config)
        .connect(&config.connection_url())
        .await
        .map_err(|e| {
            log::error!("Failed to open database pool: {}", e);
            BnbError::from(e)
        })?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await.map_err(|e| {
        log::error!("Database health check failed: {}", e);
        BnbError::from(e)
    })?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}

/// Build a pool without opening any connection
/// DOCUMENTATION: Connections are established on first use, so startup
/// never blocks on the store
pub fn init_lazy_pool(config: &Config) -> Result<PgPool, BnbError> {
    pool_options(config)
        .connect_lazy(&config.connection_url())
        .map_err(|e| {
            log::error!("Invalid database configuration: {}", e);
            BnbError::ConfigError(e.to_string())
        })
}

/// Apply pending schema migrations from ./migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), BnbError> {
    sqlx::migrate!("./migrations").run(pool).await.map_err(|e| {
        log::error!("Migration failed: {}", e);
        BnbError::from(e)
    })?;

    log::info!("Database schema is up to date");
    Ok(())
}
