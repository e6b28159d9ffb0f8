//! History entity - the archived snapshot of a closed guest list.
//!
//! Distinct from the per-user `ListHistoryEntry`: a `History` is the list's
//! own record, carrying per-attendee settlement data (consumption rounds
//! and the entry ticket).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entry ticket settlement for one attendee. A non-paying ticket carries
/// the reason and who approved it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub paying: bool,
    pub reason: Option<String>,
    pub approver_id: Option<Uuid>,
}

impl Ticket {
    pub fn paying() -> Self {
        Self {
            paying: true,
            reason: None,
            approver_id: None,
        }
    }
}

/// One attendee in an archived list, with consumption rounds marked off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryAttendee {
    pub user_id: Uuid,
    pub first_round: bool,
    pub second_round: bool,
    pub ticket: Ticket,
}

impl HistoryAttendee {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            first_round: false,
            second_round: false,
            ticket: Ticket::paying(),
        }
    }
}

/// Archived guest list. `name` and `event_name` are copied from the list
/// at archive time so the record survives the list's deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub id: Uuid,
    pub list_id: Option<Uuid>,
    pub name: String,
    pub event_name: Option<String>,
    pub list_date: DateTime<Utc>,
    pub joined_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
    /// Exam lists carry the promoter's score once graded
    pub is_exam: bool,
    pub exam_score: Option<f64>,
    pub attendees: Vec<HistoryAttendee>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl History {
    pub fn new(name: String, list_date: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            list_id: None,
            name,
            event_name: None,
            list_date,
            joined_at: now,
            left_at: None,
            is_exam: false,
            exam_score: None,
            attendees: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
