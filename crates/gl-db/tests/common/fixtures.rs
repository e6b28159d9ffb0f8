#![allow(dead_code)]

use gl_core::{Event, GuestList, History, HistoryAttendee, Lot, Penalty, PenaltyDuration};
use gl_db::UserPatch;

use chrono::Utc;
use uuid::Uuid;

/// Creates a patch that fills every upsertable field
pub fn full_user_patch(name: &str) -> UserPatch {
    UserPatch {
        name: Some(name.to_string()),
        birth_date: Some(chrono::NaiveDate::from_ymd_opt(1995, 6, 15).unwrap()),
        phone: Some("11999998888".to_string()),
        gender: Some(gl_core::Gender::Female),
        profile: Some(gl_core::Profile::Promoter),
        anniversary: Some(true),
        cash: Some(50.0),
    }
}

/// Creates a test Event running from now for six hours
pub fn create_test_event(title: &str) -> Event {
    let now = Utc::now();
    let mut event = Event::new(title.to_string(), now, now + chrono::Duration::hours(6));
    event.base_price = 30.0;
    event.female_base_price = 20.0;
    event.male_base_price = 40.0;
    event
}

/// Creates a test GuestList running from now for six hours
pub fn create_test_guest_list(title: &str) -> GuestList {
    let now = Utc::now();
    GuestList::new(title.to_string(), now, now + chrono::Duration::hours(6))
}

/// Creates a 15-day penalty starting now
pub fn create_test_penalty(observation: &str) -> Penalty {
    Penalty::new(observation.to_string(), PenaltyDuration::FifteenDays)
}

/// Creates a test Lot of 100 tickets at 25.0
pub fn create_test_lot(title: &str) -> Lot {
    Lot::new(title.to_string(), 100, 25.0)
}

/// Creates a test History dated now
pub fn create_test_history(name: &str) -> History {
    History::new(name.to_string(), Utc::now())
}

/// Creates an attendee who drank the first round on a paying ticket
pub fn create_test_attendee(user_id: Uuid) -> HistoryAttendee {
    let mut attendee = HistoryAttendee::new(user_id);
    attendee.first_round = true;
    attendee
}
