use gl_core::GuestList;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GuestListDto {
    pub id: String,
    pub title: String,
    pub owner_id: Option<String>,
    pub event_id: Option<String>,
    pub event_name: Option<String>,
    pub is_exam: bool,
    pub start_date: String,
    pub end_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<GuestList> for GuestListDto {
    fn from(list: GuestList) -> Self {
        Self {
            id: list.id.to_string(),
            title: list.title,
            owner_id: list.owner_id.map(|o| o.to_string()),
            event_id: list.event_id.map(|e| e.to_string()),
            event_name: list.event_name,
            is_exam: list.is_exam,
            start_date: list.start_date.to_rfc3339(),
            end_date: list.end_date.to_rfc3339(),
            created_at: list.created_at.to_rfc3339(),
            updated_at: list.updated_at.to_rfc3339(),
        }
    }
}
