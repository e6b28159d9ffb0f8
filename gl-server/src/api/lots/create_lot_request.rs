use serde::Deserialize;

/// Body for POST /api/v1/lots
#[derive(Debug, Deserialize)]
pub struct CreateLotRequest {
    pub title: String,
    pub event_id: Option<String>,
    pub quantity: Option<i64>,
    pub value: Option<f64>,
    pub male_lot: Option<bool>,
    pub female_lot: Option<bool>,
}
