use crate::{History, HistoryAttendee};

use chrono::Utc;
use uuid::Uuid;

#[test]
fn test_new_history_defaults() {
    let history = History::new("Friday VIP".to_string(), Utc::now());

    assert!(history.list_id.is_none());
    assert!(history.event_name.is_none());
    assert!(history.left_at.is_none());
    assert!(!history.is_exam);
    assert!(history.exam_score.is_none());
    assert!(history.attendees.is_empty());
}

#[test]
fn test_new_attendee_starts_on_paying_ticket() {
    let attendee = HistoryAttendee::new(Uuid::new_v4());

    assert!(!attendee.first_round);
    assert!(!attendee.second_round);
    assert!(attendee.ticket.paying);
    assert!(attendee.ticket.reason.is_none());
    assert!(attendee.ticket.approver_id.is_none());
}

#[test]
fn test_attendee_serde_round_trip() {
    let mut attendee = HistoryAttendee::new(Uuid::new_v4());
    attendee.ticket.paying = false;
    attendee.ticket.reason = Some("staff".to_string());

    let json = serde_json::to_string(&attendee).unwrap();
    let decoded: HistoryAttendee = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, attendee);
}
