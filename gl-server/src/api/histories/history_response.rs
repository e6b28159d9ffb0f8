use crate::api::histories::history_dto::HistoryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: HistoryDto,
}
