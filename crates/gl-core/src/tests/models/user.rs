use crate::{Penalty, PenaltyDuration, Profile, User};

use chrono::{Duration, Utc};

#[test]
fn test_new_user_defaults() {
    let user = User::new("12345678909".to_string(), "Ana".to_string());

    assert_eq!(user.profile, Profile::Member);
    assert_eq!(user.cash, 0.0);
    assert!(!user.anniversary);
    assert!(!user.has_password());
    assert!(user.penalties.is_empty());
    assert!(user.history.is_empty());
}

#[test]
fn test_penalized_only_while_penalty_active() {
    let mut user = User::new("12345678909".to_string(), "Ana".to_string());
    assert!(!user.is_penalized_at(Utc::now()));

    let mut penalty = Penalty::new("no-show".to_string(), PenaltyDuration::FifteenDays);
    penalty.start_date = Utc::now() - Duration::days(20);
    user.penalties.push(penalty);

    assert!(!user.is_penalized_at(Utc::now()));

    user.penalties
        .push(Penalty::new("fight".to_string(), PenaltyDuration::SixMonths));
    assert!(user.is_penalized_at(Utc::now()));
}

#[test]
fn test_password_is_never_serialized() {
    let mut user = User::new("12345678909".to_string(), "Ana".to_string());
    user.password = Some("$2b$10$abcdefghijklmnopqrstuv".to_string());

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
}
