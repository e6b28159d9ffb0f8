use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use gl_core::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims.
///
/// Wire names match what older deployments of this system already issue:
/// `sub` carries the user id, `client_id` the tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Tenant identifier
    pub client_id: String,
    /// Profile at issuance time, informational only
    #[serde(default)]
    pub profile: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.client_id.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "client_id".to_string(),
                message: "client_id cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.client_id.len() > 128 {
            return Err(AuthError::InvalidClaim {
                claim: "client_id".to_string(),
                message: "client_id exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
