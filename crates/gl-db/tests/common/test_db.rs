use gl_db::{TenantConnectionManager, TenantContext};

use std::time::Duration;

use tempfile::TempDir;

pub const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Creates a manager with two registered tenants over a temp data directory
pub fn create_test_manager(dir: &TempDir) -> TenantConnectionManager {
    TenantConnectionManager::new(
        dir.path(),
        &["tenant-a".to_string(), "tenant-b".to_string()],
        QUERY_TIMEOUT,
    )
}

/// Resolves tenant-a in a fresh temp data directory.
/// The TempDir must be kept alive for as long as the context is used.
pub async fn create_test_context() -> (TenantContext, TempDir) {
    let dir = TempDir::new().unwrap();
    let manager = create_test_manager(&dir);
    let ctx = manager.resolve("tenant-a").await.unwrap();
    (ctx, dir)
}

/// Resolves both registered tenants in the same temp data directory
pub async fn create_two_tenant_contexts() -> (TenantContext, TenantContext, TempDir) {
    let dir = TempDir::new().unwrap();
    let manager = create_test_manager(&dir);
    let ctx_a = manager.resolve("tenant-a").await.unwrap();
    let ctx_b = manager.resolve("tenant-b").await.unwrap();
    (ctx_a, ctx_b, dir)
}
