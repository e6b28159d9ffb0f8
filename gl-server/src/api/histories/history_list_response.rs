use crate::api::histories::history_dto::HistoryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub histories: Vec<HistoryDto>,
}
