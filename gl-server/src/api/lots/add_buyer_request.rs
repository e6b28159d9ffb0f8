use serde::Deserialize;

/// Body for POST /api/v1/lots/{id}/buyers
#[derive(Debug, Deserialize)]
pub struct AddBuyerRequest {
    pub user_id: String,
}
