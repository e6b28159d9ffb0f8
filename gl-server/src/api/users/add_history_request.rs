use serde::Deserialize;

/// Body for POST /api/v1/users/{cpf}/history
#[derive(Debug, Deserialize)]
pub struct AddHistoryRequest {
    pub list_id: String,
}
