use serde::Deserialize;

/// Body for POST /api/v1/events
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    /// RFC3339 timestamps
    pub start_date: String,
    pub end_date: String,
    pub base_price: Option<f64>,
    pub female_base_price: Option<f64>,
    pub male_base_price: Option<f64>,
}
