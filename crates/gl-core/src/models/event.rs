//! Event entity - a dated venue event that guest lists attach to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An event owned by a tenant.
/// Base prices are split by gender because lots are commonly gendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub owner_id: Option<Uuid>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub base_price: f64,
    pub female_base_price: f64,
    pub male_base_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Create a new event with default prices
    pub fn new(title: String, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            owner_id: None,
            start_date,
            end_date,
            base_price: 0.0,
            female_base_price: 0.0,
            male_base_price: 0.0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if event is deleted (soft delete)
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
