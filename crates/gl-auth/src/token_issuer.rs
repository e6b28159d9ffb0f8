use crate::{AuthError, Claims, Result as AuthErrorResult};

use gl_core::ErrorLocation;

use std::panic::Location;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// A freshly minted session token plus the claims it carries.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

impl IssuedToken {
    /// Seconds until expiry, as reported to login clients
    pub fn expires_in(&self) -> i64 {
        self.claims.exp - self.claims.iat
    }
}

/// Mints HS256 session tokens on the login path.
///
/// The signing secret comes from process configuration; a deployment
/// without one fails config validation at startup, so this type never has
/// to handle a missing key.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    /// Create issuer with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs: ttl_secs as i64,
        }
    }

    /// Mint a token for (user, tenant). `exp` is exactly `iat + ttl`.
    #[track_caller]
    pub fn issue(
        &self,
        user_id: &str,
        client_id: &str,
        profile: &str,
    ) -> AuthErrorResult<IssuedToken> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            client_id: client_id.to_string(),
            profile: profile.to_string(),
            iat,
            exp: iat + self.ttl_secs,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        Ok(IssuedToken { token, claims })
    }
}
