use serde::Deserialize;

/// Body for PUT /api/v1/lists/{id}. Omitted fields keep their stored
/// values.
#[derive(Debug, Deserialize)]
pub struct UpdateGuestListRequest {
    pub title: Option<String>,
    pub event_id: Option<String>,
    pub is_exam: Option<bool>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
