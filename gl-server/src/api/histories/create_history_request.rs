use serde::Deserialize;

/// Body for POST /api/v1/histories
#[derive(Debug, Deserialize)]
pub struct CreateHistoryRequest {
    pub name: String,
    pub list_id: Option<String>,
    pub event_name: Option<String>,
    /// RFC3339 timestamps
    pub list_date: String,
    pub left_at: Option<String>,
    pub is_exam: Option<bool>,
    pub exam_score: Option<f64>,
}
