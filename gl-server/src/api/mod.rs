pub mod auth;
pub mod delete_response;
pub mod error;
pub mod events;
pub mod extractors;
pub mod histories;
pub mod lists;
pub mod lots;
pub mod users;

use gl_core::ErrorLocation;

use std::panic::Location;

use chrono::{DateTime, Utc};

/// Parse an RFC3339 timestamp from a request body field
#[track_caller]
pub(crate) fn parse_datetime(value: &str, field: &str) -> error::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| error::ApiError::Validation {
            message: format!("Invalid {}: {}", field, e),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        })
}
