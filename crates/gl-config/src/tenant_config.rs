use crate::{ConfigError, ConfigErrorResult, MAX_TENANT_ID_LENGTH};

use serde::Deserialize;

/// Static tenant registry. Tenants are registered at startup; an id missing
/// from this list never resolves, it fails with UnknownTenant downstream.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TenantConfig {
    pub ids: Vec<String>,
}

impl TenantConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.ids.is_empty() {
            return Err(ConfigError::tenant(
                "tenants.ids is required and cannot be empty \
                 (set it in config.toml or GL_TENANTS)",
            ));
        }

        for id in &self.ids {
            if id.is_empty() || id.len() > MAX_TENANT_ID_LENGTH {
                return Err(ConfigError::tenant(format!(
                    "tenant id must be 1-{} characters, got {:?}",
                    MAX_TENANT_ID_LENGTH, id
                )));
            }

            // Tenant ids become directory names; keep them path-safe
            if !id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
            {
                return Err(ConfigError::tenant(format!(
                    "tenant id may only contain [a-z0-9_-], got {:?}",
                    id
                )));
            }
        }

        Ok(())
    }
}
