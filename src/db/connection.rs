//! Database and Redis connection management

use std::time::Duration;

use redis::aio::ConnectionManager;
use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::{DatabaseConfig, RedisConfig};

/// Create a new database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.url)
        .await
}

/// Open a managed (auto-reconnecting) Redis connection
pub async fn create_redis(config: &RedisConfig) -> Result<ConnectionManager, redis::RedisError> {
    let client = redis::Client::open(config.url.as_str())?;
    ConnectionManager::new(client).await
}

/// Check that the database answers queries
pub async fn ping_database(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Check that Redis answers commands
pub async fn ping_redis(mut redis: ConnectionManager) -> Result<(), redis::RedisError> {
    let _: String = redis::cmd("PING").query_async(&mut redis).await?;
    Ok(())
}
