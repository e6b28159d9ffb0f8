pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use crate::routes::build_router;
pub use crate::state::AppState;

use gl_auth::{JwtValidator, TokenIssuer};
use gl_db::TenantConnectionManager;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A local .env can supply GL_* overrides during development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = gl_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = gl_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gl-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Per-tenant database files live under the data directory
    let data_dir = config.data_dir()?;
    info!("Tenant data directory: {}", data_dir.display());

    let connections = Arc::new(TenantConnectionManager::new(
        data_dir,
        &config.tenants.ids,
        Duration::from_secs(config.database.query_timeout_secs),
    ));

    // validate() already rejected a missing secret; this keeps the
    // startup path unwrap-free
    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| gl_config::ConfigError::auth("auth.jwt_secret must be set"))?;

    info!("JWT: HS256 session tokens, ttl {}s", config.auth.token_ttl_secs);
    let jwt_validator = Arc::new(JwtValidator::with_hs256(secret.as_bytes()));
    let token_issuer = Arc::new(TokenIssuer::with_hs256(
        secret.as_bytes(),
        config.auth.token_ttl_secs,
    ));

    // Build application state
    let app_state = AppState {
        connections,
        jwt_validator,
        token_issuer,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                }
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
