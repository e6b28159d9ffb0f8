use serde::Deserialize;

/// Body for PUT /api/v1/lots/{id}. Omitted fields keep their stored
/// values.
#[derive(Debug, Deserialize)]
pub struct UpdateLotRequest {
    pub title: Option<String>,
    pub event_id: Option<String>,
    pub quantity: Option<i64>,
    pub value: Option<f64>,
    pub sold_out: Option<bool>,
    pub male_lot: Option<bool>,
    pub female_lot: Option<bool>,
}
