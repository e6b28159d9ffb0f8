use gl_core::Lot;

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct LotDto {
    pub id: String,
    pub title: String,
    pub event_id: Option<String>,
    pub quantity: i64,
    pub value: f64,
    pub sold_out: bool,
    pub male_lot: bool,
    pub female_lot: bool,
    pub buyers: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Lot> for LotDto {
    fn from(lot: Lot) -> Self {
        Self {
            id: lot.id.to_string(),
            title: lot.title,
            event_id: lot.event_id.map(|e| e.to_string()),
            quantity: lot.quantity,
            value: lot.value,
            sold_out: lot.sold_out,
            male_lot: lot.male_lot,
            female_lot: lot.female_lot,
            buyers: lot.buyers.iter().map(Uuid::to_string).collect(),
            created_at: lot.created_at.to_rfc3339(),
            updated_at: lot.updated_at.to_rfc3339(),
        }
    }
}
