use serde::Deserialize;

/// Body for PUT /api/v1/events/{id}. Omitted fields keep their stored
/// values.
#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub base_price: Option<f64>,
    pub female_base_price: Option<f64>,
    pub male_base_price: Option<f64>,
}
