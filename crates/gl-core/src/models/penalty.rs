use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a penalty bans a user from joining lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PenaltyDuration {
    #[serde(rename = "15_days")]
    FifteenDays,
    #[serde(rename = "30_days")]
    ThirtyDays,
    #[serde(rename = "3_months")]
    ThreeMonths,
    #[serde(rename = "6_months")]
    SixMonths,
}

impl PenaltyDuration {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FifteenDays => "15_days",
            Self::ThirtyDays => "30_days",
            Self::ThreeMonths => "3_months",
            Self::SixMonths => "6_months",
        }
    }

    /// Ban length in days (months are calendar-agnostic 30-day blocks)
    pub fn days(&self) -> i64 {
        match self {
            Self::FifteenDays => 15,
            Self::ThirtyDays => 30,
            Self::ThreeMonths => 90,
            Self::SixMonths => 180,
        }
    }
}

impl FromStr for PenaltyDuration {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "15_days" => Ok(Self::FifteenDays),
            "30_days" => Ok(Self::ThirtyDays),
            "3_months" => Ok(Self::ThreeMonths),
            "6_months" => Ok(Self::SixMonths),
            _ => Err(CoreError::InvalidPenaltyDuration {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PenaltyDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A disciplinary penalty appended to a user's record.
/// Penalties are append-only; lifting one early is a manual data fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penalty {
    pub observation: String,
    pub duration: PenaltyDuration,
    pub start_date: DateTime<Utc>,
}

impl Penalty {
    pub fn new(observation: String, duration: PenaltyDuration) -> Self {
        Self {
            observation,
            duration,
            start_date: Utc::now(),
        }
    }

    /// Whether the penalty is still in force at `at`
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        at < self.start_date + Duration::days(self.duration.days())
    }
}
