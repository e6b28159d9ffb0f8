pub mod error_location;

// -------------------------------------------------------------------------- //

use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid CPF: {value:?} {location}")]
    InvalidCpf {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid profile: {value} {location}")]
    InvalidProfile {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid gender: {value} {location}")]
    InvalidGender {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid penalty duration: {value} {location}")]
    InvalidPenaltyDuration {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
