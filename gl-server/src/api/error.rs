//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. Store and crypto internals are
//! logged server-side and never exposed in response bodies.

use gl_auth::AuthError;
use gl_core::{CoreError, ErrorLocation};
use gl_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed credentials (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Token present but failed verification (401)
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    /// Token was valid once but has expired (401)
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    /// Login rejected; deliberately covers both unknown CPF and wrong
    /// password (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Tenant not in the registry (403)
    #[error("Unknown tenant: {tenant_id} {location}")]
    UnknownTenant {
        tenant_id: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). The message is logged, never returned.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Unauthenticated { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHENTICATED".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::InvalidToken { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_TOKEN".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::TokenExpired { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "TOKEN_EXPIRED".into(),
                    message: "Session token has expired".into(),
                    field: None,
                },
            ),
            ApiError::InvalidCredentials { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".into(),
                    message: "Invalid credentials".into(),
                    field: None,
                },
            ),
            ApiError::UnknownTenant { tenant_id, .. } => (
                StatusCode::FORBIDDEN,
                ApiErrorBody {
                    code: "UNKNOWN_TENANT".into(),
                    message: format!("Tenant {} is not registered", tenant_id),
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message: "Internal server error".into(),
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = match &e {
            CoreError::InvalidCpf { .. } => Some("cpf".to_string()),
            CoreError::InvalidGender { .. } => Some("gender".to_string()),
            CoreError::InvalidProfile { .. } => Some("profile".to_string()),
            CoreError::InvalidPenaltyDuration { .. } => Some("duration".to_string()),
        };

        ApiError::Validation {
            message: e.to_string(),
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::TokenExpired { .. } => ApiError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::MissingHeader { .. } | AuthError::InvalidScheme { .. } => {
                ApiError::Unauthenticated {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            AuthError::InvalidCredentials { .. } => ApiError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::InvalidToken { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => ApiError::InvalidToken {
                message: "Token verification failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::JwtEncode { .. } | AuthError::PasswordHash { .. } => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Log the database error for debugging
        log::error!("Database error: {}", e);

        match e {
            DbError::UnknownTenant { tenant_id, .. } => ApiError::UnknownTenant {
                tenant_id,
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::NotFound { entity, .. } => ApiError::NotFound {
                message: format!("{} not found", entity),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx {
                source: sqlx_err, ..
            } => match sqlx_err {
                sqlx::Error::RowNotFound => ApiError::NotFound {
                    message: "Resource not found".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                },
            },
            DbError::Timeout { .. } => ApiError::Internal {
                message: "Store query exceeded deadline".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Unavailable { .. } => ApiError::Internal {
                message: "Store unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Migration { .. } | DbError::Initialization { .. } | DbError::Decode { .. } => {
                ApiError::Internal {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
