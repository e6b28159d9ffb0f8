pub mod create_guest_list_request;
pub mod guest_list_dto;
pub mod guest_list_list_response;
pub mod guest_list_response;
#[allow(clippy::module_inception)]
pub mod lists;
pub mod update_guest_list_request;
