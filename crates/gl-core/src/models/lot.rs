//! Ticket lot entity - a priced sales batch, optionally tied to an event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A batch of tickets sold at one price point.
/// Gendered flags mark lots restricted to one gender; `buyers` records who
/// purchased, in purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    pub id: Uuid,
    pub title: String,
    pub event_id: Option<Uuid>,
    pub quantity: i64,
    pub value: f64,
    pub sold_out: bool,
    pub male_lot: bool,
    pub female_lot: bool,
    pub buyers: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Lot {
    pub fn new(title: String, quantity: i64, value: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            event_id: None,
            quantity,
            value,
            sold_out: false,
            male_lot: false,
            female_lot: false,
            buyers: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if lot is deleted (soft delete)
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether another ticket can still be sold from this lot
    pub fn has_capacity(&self) -> bool {
        !self.sold_out && (self.buyers.len() as i64) < self.quantity
    }
}
