use crate::{Penalty, PenaltyDuration};

use std::str::FromStr;

use chrono::{Duration, Utc};

#[test]
fn test_penalty_duration_round_trip() {
    for duration in [
        PenaltyDuration::FifteenDays,
        PenaltyDuration::ThirtyDays,
        PenaltyDuration::ThreeMonths,
        PenaltyDuration::SixMonths,
    ] {
        assert_eq!(
            PenaltyDuration::from_str(duration.as_str()).unwrap(),
            duration
        );
    }
    assert!(PenaltyDuration::from_str("1_year").is_err());
}

#[test]
fn test_penalty_duration_days() {
    assert_eq!(PenaltyDuration::FifteenDays.days(), 15);
    assert_eq!(PenaltyDuration::ThirtyDays.days(), 30);
    assert_eq!(PenaltyDuration::ThreeMonths.days(), 90);
    assert_eq!(PenaltyDuration::SixMonths.days(), 180);
}

#[test]
fn test_penalty_active_window() {
    let penalty = Penalty::new("no-show".to_string(), PenaltyDuration::FifteenDays);

    assert!(penalty.is_active_at(Utc::now()));
    assert!(penalty.is_active_at(penalty.start_date + Duration::days(14)));
    assert!(!penalty.is_active_at(penalty.start_date + Duration::days(16)));
}

#[test]
fn test_penalty_serde_uses_wire_names() {
    let penalty = Penalty::new("fight".to_string(), PenaltyDuration::ThreeMonths);
    let json = serde_json::to_value(&penalty).unwrap();
    assert_eq!(json["duration"], "3_months");
}
