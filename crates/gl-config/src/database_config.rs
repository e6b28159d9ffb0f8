use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATA_DIRECTORY, DEFAULT_QUERY_TIMEOUT_SECS,
    MAX_QUERY_TIMEOUT_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Directory holding one SQLite database per tenant
    pub dir: String,
    /// Deadline applied to every repository query
    pub query_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_DATA_DIRECTORY),
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Keep tenant databases inside the config directory
        if std::path::Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::database(
                "database.dir must be relative and cannot contain '..'",
            ));
        }

        if self.query_timeout_secs == 0 || self.query_timeout_secs > MAX_QUERY_TIMEOUT_SECS {
            return Err(ConfigError::database(format!(
                "database.query_timeout_secs must be 1-{}, got {}",
                MAX_QUERY_TIMEOUT_SECS, self.query_timeout_secs
            )));
        }

        Ok(())
    }
}
