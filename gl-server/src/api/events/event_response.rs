use crate::api::events::event_dto::EventDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub event: EventDto,
}
