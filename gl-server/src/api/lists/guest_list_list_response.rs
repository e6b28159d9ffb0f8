use crate::api::lists::guest_list_dto::GuestListDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GuestListListResponse {
    pub lists: Vec<GuestListDto>,
}
