use crate::api::error::{ApiError, Result as ApiResult};

use gl_core::{ErrorLocation, Gender, Profile};
use gl_db::UserPatch;

use std::panic::Location;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;

/// Body for PUT /api/v1/users/{cpf}. Every field is optional; omitted
/// fields keep their stored value. There is deliberately no password field.
#[derive(Debug, Deserialize)]
pub struct UpsertUserRequest {
    pub name: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub profile: Option<String>,
    pub anniversary: Option<bool>,
    pub cash: Option<f64>,
}

impl UpsertUserRequest {
    pub fn into_patch(self) -> ApiResult<UserPatch> {
        let birth_date = self
            .birth_date
            .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
            .transpose()
            .map_err(|e| ApiError::Validation {
                message: format!("Invalid birth_date: {}", e),
                field: Some("birth_date".to_string()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let gender = self.gender.as_deref().map(Gender::from_str).transpose()?;
        let profile = self.profile.as_deref().map(Profile::from_str).transpose()?;

        Ok(UserPatch {
            name: self.name,
            birth_date,
            phone: self.phone,
            gender,
            profile,
            anniversary: self.anniversary,
            cash: self.cash,
        })
    }
}
