//! Login handler.
//!
//! Every rejection on this path is the same `INVALID_CREDENTIALS` body, so a
//! caller cannot distinguish an unknown CPF from a wrong password. Stored
//! legacy plaintext values are migrated to bcrypt on the first successful
//! login; already-hashed values are never re-hashed.

use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::login_response::LoginResponse;
use crate::api::error::Result as ApiResult;
use crate::state::AppState;

use gl_auth::{AuthError, PasswordMatch, hash_password, verify_password};
use gl_core::{ErrorLocation, normalize_cpf};
use gl_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let cpf = normalize_cpf(&request.cpf)?;

    // UnknownTenant (403) fires before any credential work
    let tenant = state.connections.resolve(&request.client_id).await?;
    let repo = UserRepository::new(&tenant);

    let user = repo
        .find_by_cpf(&cpf)
        .await?
        .ok_or_else(invalid_credentials)?;

    let stored = user.password.as_deref().ok_or_else(invalid_credentials)?;

    match verify_password(stored, &request.password)? {
        PasswordMatch::Mismatch => Err(invalid_credentials().into()),
        PasswordMatch::Match { needs_rehash } => {
            if needs_rehash {
                let hash = hash_password(&request.password)?;
                repo.set_password(&cpf, &hash).await?;
                log::info!("Migrated legacy password for user {}", user.id);
            }

            let issued = state.token_issuer.issue(
                &user.id.to_string(),
                &tenant.tenant_id,
                user.profile.as_str(),
            )?;

            log::info!(
                "Login succeeded for user {} on tenant {}",
                user.id,
                tenant.tenant_id
            );

            Ok(Json(LoginResponse {
                expires_in: issued.expires_in(),
                token: issued.token,
                user: user.into(),
            }))
        }
    }
}

#[track_caller]
fn invalid_credentials() -> AuthError {
    AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}
