use gl_core::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

/// Startup configuration failures. Every variant refuses to serve; none
/// of these are downgraded to per-request errors.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Server config: {message} {location}")]
    Server {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database config: {message} {location}")]
    Database {
        message: String,
        location: ErrorLocation,
    },

    #[error("Auth config: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    #[error("Tenant registry: {message} {location}")]
    Tenant {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logging config: {message} {location}")]
    Logging {
        message: String,
        location: ErrorLocation,
    },

    #[error("Config: {message} {location}")]
    General {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

macro_rules! section_ctor {
    ($name:ident, $variant:ident) => {
        #[track_caller]
        pub fn $name<S: Into<String>>(message: S) -> Self {
            ConfigError::$variant {
                message: message.into(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    };
}

impl ConfigError {
    section_ctor!(server, Server);
    section_ctor!(database, Database);
    section_ctor!(auth, Auth);
    section_ctor!(tenant, Tenant);
    section_ctor!(logging, Logging);
    section_ctor!(config, General);
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
