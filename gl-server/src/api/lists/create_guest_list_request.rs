use serde::Deserialize;

/// Body for POST /api/v1/lists
#[derive(Debug, Deserialize)]
pub struct CreateGuestListRequest {
    pub title: String,
    /// Attach to an event; its title is denormalized onto the list
    pub event_id: Option<String>,
    #[serde(default)]
    pub is_exam: bool,
    /// RFC3339 timestamps
    pub start_date: String,
    pub end_date: String,
}
