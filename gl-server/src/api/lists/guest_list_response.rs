use crate::api::lists::guest_list_dto::GuestListDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GuestListResponse {
    pub list: GuestListDto,
}
