//! PostgreSQL connection pool.
//!
//! One pool is built at startup and shared by reference with the repository
//! and the readiness probe; there is no process-wide handle.

use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;

pub type DbPool = Pool<Postgres>;

/// How long a caller waits for a free connection before the request fails
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query through the pool.
pub async fn check_connection(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Snapshot of pool occupancy
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PoolStatus {
    pub open: u32,
    pub idle: usize,
}

pub fn pool_status(pool: &DbPool) -> PoolStatus {
    PoolStatus {
        open: pool.size(),
        idle: pool.num_idle(),
    }
}
