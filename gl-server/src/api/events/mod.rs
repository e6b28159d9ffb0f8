pub mod create_event_request;
pub mod event_dto;
pub mod event_list_response;
pub mod event_response;
#[allow(clippy::module_inception)]
pub mod events;
pub mod update_event_request;
