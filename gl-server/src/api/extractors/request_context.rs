//! The authentication gate for every protected route.
//!
//! Extraction runs the full verification chain on each request: bearer
//! header shape, token signature and expiry, claim shape, then tenant
//! resolution. A handler that takes `RequestContext` can only execute with a
//! verified identity and a resolved tenant.

use crate::api::error::ApiError;
use crate::state::AppState;

use gl_auth::AuthError;
use gl_core::ErrorLocation;
use gl_db::TenantContext;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use uuid::Uuid;

pub struct RequestContext {
    pub user_id: Uuid,
    /// Profile claim as issued at login, informational only
    pub profile: String,
    pub tenant: TenantContext,
}

impl FromRequestParts<AppState> for RequestContext {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let value = header.to_str().map_err(|_| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?;

            let token = value
                .strip_prefix("Bearer ")
                .ok_or_else(|| AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.jwt_validator.validate(token)?;

            let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken {
                message: "sub claim is not a valid user id".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            // A token for a tenant that has since been removed from the
            // registry dies here with 403, not 401.
            let tenant = state.connections.resolve(&claims.client_id).await?;

            log::debug!(
                "Authenticated user {} for tenant {}",
                user_id,
                tenant.tenant_id
            );

            Ok(RequestContext {
                user_id,
                profile: claims.profile,
                tenant,
            })
        }
    }
}
