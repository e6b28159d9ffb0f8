pub mod add_history_request;
pub mod add_penalty_request;
pub mod set_password_request;
pub mod upsert_user_request;
pub mod user_dto;
pub mod user_list_response;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
