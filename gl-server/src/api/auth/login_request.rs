use serde::Deserialize;

/// Body for POST /api/v1/auth/login.
/// Clients say which tenant they are logging into; there is no cross-tenant
/// credential search.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub client_id: String,
    pub cpf: String,
    pub password: String,
}
