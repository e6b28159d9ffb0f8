use crate::api::events::event_dto::EventDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<EventDto>,
}
