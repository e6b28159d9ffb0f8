pub mod attendee_request;
pub mod create_history_request;
#[allow(clippy::module_inception)]
pub mod histories;
pub mod history_dto;
pub mod history_list_response;
pub mod history_response;
