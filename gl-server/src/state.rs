use gl_auth::{JwtValidator, TokenIssuer};
use gl_db::TenantConnectionManager;

use std::sync::Arc;

/// Shared application state.
///
/// Everything here is immutable after startup; the only interior mutability
/// is the pool cache inside the connection manager.
#[derive(Clone)]
pub struct AppState {
    pub connections: Arc<TenantConnectionManager>,
    pub jwt_validator: Arc<JwtValidator>,
    pub token_issuer: Arc<TokenIssuer>,
}
