use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig,
    TenantConfig,
};

use std::path::PathBuf;
use std::str::FromStr;

use log::info;
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub tenants: TenantConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration: `config.toml` under the config directory when it
    /// exists (otherwise defaults), then `GL_*` environment overrides on
    /// top. Does not validate; call `validate()` afterwards so every
    /// problem is caught at startup.
    pub fn load() -> ConfigErrorResult<Self> {
        let dir = Self::config_dir()?;

        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let path = dir.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

            toml::from_str(&raw).map_err(|e| ConfigError::Toml { path, source: e })?
        } else {
            Config::default()
        };

        config.overlay_env();

        Ok(config)
    }

    /// Config directory: `GL_CONFIG_DIR` when set, else `./.gl/`.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Some(dir) = env_string("GL_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;

        Ok(cwd.join(".gl"))
    }

    /// Validate every section. A missing signing secret or an empty tenant
    /// registry refuses to serve here; neither is ever downgraded to a
    /// per-request auth failure.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.tenants.validate()?;

        Ok(())
    }

    /// Absolute path to the per-tenant data directory.
    pub fn data_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration. Never logs the signing secret,
    /// only its length.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: dir={} query_timeout={}s",
            self.database.dir, self.database.query_timeout_secs
        );
        info!(
            "  auth: HS256 (secret {} bytes), token ttl {}s",
            self.auth.jwt_secret.as_deref().map(str::len).unwrap_or(0),
            self.auth.token_ttl_secs
        );
        info!("  tenants: {}", self.tenants.ids.join(", "));
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    /// `GL_*` environment variables win over file values. Unparseable
    /// numeric or level values are ignored, keeping the file value.
    fn overlay_env(&mut self) {
        if let Some(host) = env_string("GL_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_parse("GL_SERVER_PORT") {
            self.server.port = port;
        }

        if let Some(dir) = env_string("GL_DATABASE_DIR") {
            self.database.dir = dir;
        }
        if let Some(timeout) = env_parse("GL_DATABASE_QUERY_TIMEOUT_SECS") {
            self.database.query_timeout_secs = timeout;
        }

        if let Some(secret) = env_string("GL_AUTH_JWT_SECRET") {
            self.auth.jwt_secret = Some(secret);
        }
        if let Some(ttl) = env_parse("GL_AUTH_TOKEN_TTL_SECS") {
            self.auth.token_ttl_secs = ttl;
        }

        // Comma-separated registry, e.g. GL_TENANTS=club-a,club-b
        if let Some(ids) = env_string("GL_TENANTS") {
            self.tenants.ids = ids
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(level) = env_parse("GL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(colored) = env_string("GL_LOG_COLORED") {
            self.logging.colored = colored == "true" || colored == "1";
        }
        if let Some(file) = env_string("GL_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env_string(name).and_then(|v| v.parse().ok())
}
