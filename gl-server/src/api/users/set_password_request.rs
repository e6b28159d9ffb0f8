use serde::Deserialize;

/// Body for PUT /api/v1/users/{cpf}/password
#[derive(Debug, Deserialize)]
pub struct SetPasswordRequest {
    pub password: String,
}
