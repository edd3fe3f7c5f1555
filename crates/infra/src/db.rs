use std::time::Duration;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared handle to the relational store. Cloning is cheap; every clone talks
/// to the same pool.
pub type Db = PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 30,
            acquire_timeout: Duration::from_secs(3),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

impl PoolSettings {
    fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(Some(self.idle_timeout))
            .max_lifetime(Some(self.max_lifetime))
    }
}

/// Open the pool and wait for the first connection.
pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<Db, sqlx::Error> {
    settings.options().connect(database_url).await
}

/// Build a pool that only connects when a query first needs a connection.
pub fn connect_lazy(database_url: &str, settings: &PoolSettings) -> Result<Db, sqlx::Error> {
    settings.options().connect_lazy(database_url)
}

pub async fn migrate(db: &Db) -> Result<(), MigrateError> {
    MIGRATOR.run(db).await
}
