use gl_core::{History, HistoryAttendee, Ticket};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TicketDto {
    pub paying: bool,
    pub reason: Option<String>,
    pub approver_id: Option<String>,
}

impl From<Ticket> for TicketDto {
    fn from(ticket: Ticket) -> Self {
        Self {
            paying: ticket.paying,
            reason: ticket.reason,
            approver_id: ticket.approver_id.map(|a| a.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryAttendeeDto {
    pub user_id: String,
    pub first_round: bool,
    pub second_round: bool,
    pub ticket: TicketDto,
}

impl From<HistoryAttendee> for HistoryAttendeeDto {
    fn from(attendee: HistoryAttendee) -> Self {
        Self {
            user_id: attendee.user_id.to_string(),
            first_round: attendee.first_round,
            second_round: attendee.second_round,
            ticket: attendee.ticket.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryDto {
    pub id: String,
    pub list_id: Option<String>,
    pub name: String,
    pub event_name: Option<String>,
    pub list_date: String,
    pub joined_at: String,
    pub left_at: Option<String>,
    pub is_exam: bool,
    pub exam_score: Option<f64>,
    pub attendees: Vec<HistoryAttendeeDto>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<History> for HistoryDto {
    fn from(history: History) -> Self {
        Self {
            id: history.id.to_string(),
            list_id: history.list_id.map(|l| l.to_string()),
            name: history.name,
            event_name: history.event_name,
            list_date: history.list_date.to_rfc3339(),
            joined_at: history.joined_at.to_rfc3339(),
            left_at: history.left_at.map(|dt| dt.to_rfc3339()),
            is_exam: history.is_exam,
            exam_score: history.exam_score,
            attendees: history
                .attendees
                .into_iter()
                .map(HistoryAttendeeDto::from)
                .collect(),
            created_at: history.created_at.to_rfc3339(),
            updated_at: history.updated_at.to_rfc3339(),
        }
    }
}
