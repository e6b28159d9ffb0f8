//! Guest list entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A guest list, optionally attached to an event.
/// `event_name` is denormalized so list views never join across entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestList {
    pub id: Uuid,
    pub title: String,
    pub owner_id: Option<Uuid>,
    pub event_id: Option<Uuid>,
    pub event_name: Option<String>,
    /// Exam lists are dry runs that never charge entry
    pub is_exam: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl GuestList {
    pub fn new(title: String, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            owner_id: None,
            event_id: None,
            event_name: None,
            is_exam: false,
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if list is deleted (soft delete)
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether the list is currently accepting guests
    pub fn is_open_at(&self, at: DateTime<Utc>) -> bool {
        !self.is_deleted() && at >= self.start_date && at <= self.end_date
    }
}
