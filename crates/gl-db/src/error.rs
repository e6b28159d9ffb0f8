use gl_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Data conversion failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Tenant not registered: {tenant_id} {location}")]
    UnknownTenant {
        tenant_id: String,
        location: ErrorLocation,
    },

    #[error("{entity} not found {location}")]
    NotFound {
        entity: &'static str,
        location: ErrorLocation,
    },

    #[error("Store query exceeded deadline {location}")]
    Timeout { location: ErrorLocation },

    #[error("Store unavailable after retry {location}")]
    Unavailable { location: ErrorLocation },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
