use serde::Deserialize;

/// Body for POST /api/v1/users/{cpf}/penalties
#[derive(Debug, Deserialize)]
pub struct AddPenaltyRequest {
    pub observation: String,
    /// One of `15_days`, `30_days`, `3_months`, `6_months`
    pub duration: String,
}
