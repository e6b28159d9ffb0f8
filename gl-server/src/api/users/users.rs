//! User REST API handlers
//!
//! All routes here sit behind the `RequestContext` gate and address users by
//! their normalized CPF.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::request_context::RequestContext;
use crate::api::users::add_history_request::AddHistoryRequest;
use crate::api::users::add_penalty_request::AddPenaltyRequest;
use crate::api::users::set_password_request::SetPasswordRequest;
use crate::api::users::upsert_user_request::UpsertUserRequest;
use crate::api::users::user_dto::UserDto;
use crate::api::users::user_list_response::UserListResponse;
use crate::api::users::user_response::UserResponse;

use gl_auth::hash_password;
use gl_core::{ErrorLocation, ListHistoryEntry, Penalty, PenaltyDuration, normalize_cpf};
use gl_db::UserRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{Json, extract::Path};
use uuid::Uuid;

/// GET /api/v1/users
///
/// List all users in the caller's tenant
pub async fn list_users(ctx: RequestContext) -> ApiResult<Json<UserListResponse>> {
    let repo = UserRepository::new(&ctx.tenant);
    let users = repo.find_all().await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/v1/users/{cpf}
///
/// Get a single user by CPF
pub async fn get_user(
    ctx: RequestContext,
    Path(cpf): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let cpf = normalize_cpf(&cpf)?;

    let repo = UserRepository::new(&ctx.tenant);
    let user = repo
        .find_by_cpf(&cpf)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", cpf),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/{cpf}
///
/// Create-or-update a user by CPF. Omitted fields keep their stored values;
/// a new record starts from defaults. Never touches the password.
pub async fn upsert_user(
    ctx: RequestContext,
    Path(cpf): Path<String>,
    Json(request): Json<UpsertUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let cpf = normalize_cpf(&cpf)?;
    let patch = request.into_patch()?;

    let repo = UserRepository::new(&ctx.tenant);
    let user = repo.upsert(&cpf, &patch).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /api/v1/users/{cpf}/penalties
///
/// Append a penalty to the user's record
pub async fn add_penalty(
    ctx: RequestContext,
    Path(cpf): Path<String>,
    Json(request): Json<AddPenaltyRequest>,
) -> ApiResult<Json<UserResponse>> {
    let cpf = normalize_cpf(&cpf)?;
    let duration = PenaltyDuration::from_str(&request.duration)?;
    let penalty = Penalty::new(request.observation, duration);

    let repo = UserRepository::new(&ctx.tenant);
    let user = repo.append_penalty(&cpf, &penalty).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /api/v1/users/{cpf}/history
///
/// Record a guest-list join on the user's history
pub async fn add_history(
    ctx: RequestContext,
    Path(cpf): Path<String>,
    Json(request): Json<AddHistoryRequest>,
) -> ApiResult<Json<UserResponse>> {
    let cpf = normalize_cpf(&cpf)?;
    let list_id = Uuid::parse_str(&request.list_id)?;

    let repo = UserRepository::new(&ctx.tenant);
    let user = repo
        .append_history(&cpf, &ListHistoryEntry::joined_now(list_id))
        .await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/{cpf}/password
///
/// Replace the user's password with a bcrypt hash of the given value
pub async fn set_password(
    ctx: RequestContext,
    Path(cpf): Path<String>,
    Json(request): Json<SetPasswordRequest>,
) -> ApiResult<Json<UserResponse>> {
    let cpf = normalize_cpf(&cpf)?;

    if request.password.is_empty() {
        return Err(ApiError::Validation {
            message: "password cannot be empty".to_string(),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let hash = hash_password(&request.password)?;

    let repo = UserRepository::new(&ctx.tenant);
    repo.set_password(&cpf, &hash).await?;

    let user = repo
        .find_by_cpf(&cpf)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", cpf),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}
