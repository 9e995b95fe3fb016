//! MySQL connection pool construction.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use vp_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Build a MySQL connection pool from configuration
///
/// The pool hands a connection to each repository call and reclaims it on
/// every exit path, including errors. The acquire timeout bounds how long a
/// stuck persistence call can starve a worker.
///
/// # Arguments
/// * `config` - Database configuration (URL, pool sizing, timeouts)
///
/// # Returns
/// * `Ok(MySqlPool)` - Connected pool
/// * `Err(InfrastructureError)` - Connection failed
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        event = "database_pool_created",
        "Connected to MySQL"
    );

    Ok(pool)
}
