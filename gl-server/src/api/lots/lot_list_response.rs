use crate::api::lots::lot_dto::LotDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LotListResponse {
    pub lots: Vec<LotDto>,
}
