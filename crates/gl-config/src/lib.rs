mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod tenant_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use tenant_config::TenantConfig;

#[cfg(test)]
mod tests;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATA_DIRECTORY: &str = "data";
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 5;
const MAX_QUERY_TIMEOUT_SECS: u64 = 60;
const DEFAULT_TOKEN_TTL_SECS: u64 = 7200;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 86_400;
const MIN_JWT_SECRET_BYTES: usize = 32;
const MAX_TENANT_ID_LENGTH: usize = 64;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
