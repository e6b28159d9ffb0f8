use gl_core::Event;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EventDto {
    pub id: String,
    pub title: String,
    pub owner_id: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub base_price: f64,
    pub female_base_price: f64,
    pub male_base_price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title,
            owner_id: event.owner_id.map(|o| o.to_string()),
            start_date: event.start_date.to_rfc3339(),
            end_date: event.end_date.to_rfc3339(),
            base_price: event.base_price,
            female_base_price: event.female_base_price,
            male_base_price: event.male_base_price,
            created_at: event.created_at.to_rfc3339(),
            updated_at: event.updated_at.to_rfc3339(),
        }
    }
}
