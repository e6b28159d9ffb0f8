//! Per-tenant connection management.
//!
//! Each tenant owns one SQLite file under `<base_path>/<tenant_id>/main.db`.
//! Pools are created lazily on first resolve, migrated, and cached for the
//! process lifetime. Tenant scoping is structural: a repository can only be
//! built from a resolved `TenantContext`, so a query can never touch another
//! tenant's data.

use crate::{DbError, Result};

use gl_core::ErrorLocation;

use std::collections::{HashMap, HashSet};
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::sync::RwLock;

/// A resolved tenant: the pool for its database plus the per-query deadline.
#[derive(Clone, Debug)]
pub struct TenantContext {
    pub tenant_id: String,
    pub pool: SqlitePool,
    pub query_timeout: Duration,
}

pub struct TenantConnectionManager {
    pools: Arc<RwLock<HashMap<String, SqlitePool>>>,
    base_path: PathBuf,
    registered: HashSet<String>,
    query_timeout: Duration,
}

impl TenantConnectionManager {
    pub fn new(
        base_path: impl Into<PathBuf>,
        tenant_ids: &[String],
        query_timeout: Duration,
    ) -> Self {
        Self {
            pools: Arc::new(RwLock::new(HashMap::new())),
            base_path: base_path.into(),
            registered: tenant_ids.iter().cloned().collect(),
            query_timeout,
        }
    }

    /// Resolve a tenant id to its context. Unregistered ids are rejected
    /// before any filesystem or pool work happens.
    pub async fn resolve(&self, tenant_id: &str) -> Result<TenantContext> {
        if !self.registered.contains(tenant_id) {
            return Err(DbError::UnknownTenant {
                tenant_id: tenant_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let pool = self.get_pool(tenant_id).await?;

        Ok(TenantContext {
            tenant_id: tenant_id.to_string(),
            pool,
            query_timeout: self.query_timeout,
        })
    }

    async fn get_pool(&self, tenant_id: &str) -> Result<SqlitePool> {
        // Fast path: Check if pool already exists (read lock)
        {
            let pools = self.pools.read().await;
            if let Some(pool) = pools.get(tenant_id) {
                return Ok(pool.clone());
            }
        }

        // Slow path: Need to create pool (write lock for entire operation)
        let mut pools = self.pools.write().await;

        // Double-check: Another thread might have created it while we waited for write lock
        if let Some(pool) = pools.get(tenant_id) {
            return Ok(pool.clone());
        }

        // Create new pool (we hold write lock to prevent other threads from doing this)
        let pool = self.create_pool(tenant_id).await?;

        // Store in cache
        pools.insert(tenant_id.to_string(), pool.clone());

        Ok(pool)
    }

    async fn create_pool(&self, tenant_id: &str) -> Result<SqlitePool> {
        let db_path = self.database_path(tenant_id);

        // Create directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Initialization {
                    message: format!("Failed to create tenant directory: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        // Enable foreign keys
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await?;

        // Run migrations
        self.run_migrations(&pool).await?;

        Ok(pool)
    }

    async fn run_migrations(&self, pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    fn database_path(&self, tenant_id: &str) -> PathBuf {
        self.base_path.join(tenant_id).join("main.db")
    }
}
