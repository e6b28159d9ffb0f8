//! History REST API handlers

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::request_context::RequestContext;
use crate::api::histories::attendee_request::AttendeeRequest;
use crate::api::histories::create_history_request::CreateHistoryRequest;
use crate::api::histories::history_dto::HistoryDto;
use crate::api::histories::history_list_response::HistoryListResponse;
use crate::api::histories::history_response::HistoryResponse;
use crate::api::parse_datetime;

use gl_core::{ErrorLocation, History, HistoryAttendee, Ticket};
use gl_db::HistoryRepository;

use std::panic::Location;

use axum::{Json, extract::Path};
use uuid::Uuid;

/// GET /api/v1/histories
pub async fn list_histories(ctx: RequestContext) -> ApiResult<Json<HistoryListResponse>> {
    let repo = HistoryRepository::new(&ctx.tenant);
    let histories = repo.find_all().await?;

    Ok(Json(HistoryListResponse {
        histories: histories.into_iter().map(HistoryDto::from).collect(),
    }))
}

/// GET /api/v1/histories/{id}
pub async fn get_history(
    ctx: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<HistoryResponse>> {
    let history_id = Uuid::parse_str(&id)?;

    let repo = HistoryRepository::new(&ctx.tenant);
    let history = repo
        .find_by_id(history_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("History {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(HistoryResponse {
        history: history.into(),
    }))
}

/// POST /api/v1/histories
pub async fn create_history(
    ctx: RequestContext,
    Json(request): Json<CreateHistoryRequest>,
) -> ApiResult<Json<HistoryResponse>> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "name cannot be empty".to_string(),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let list_date = parse_datetime(&request.list_date, "list_date")?;
    let left_at = request
        .left_at
        .as_deref()
        .map(|s| parse_datetime(s, "left_at"))
        .transpose()?;

    let mut history = History::new(request.name, list_date);
    history.list_id = request
        .list_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;
    history.event_name = request.event_name;
    history.left_at = left_at;
    history.is_exam = request.is_exam.unwrap_or(false);
    history.exam_score = request.exam_score;

    let repo = HistoryRepository::new(&ctx.tenant);
    repo.create(&history).await?;

    Ok(Json(HistoryResponse {
        history: history.into(),
    }))
}

/// DELETE /api/v1/histories/{id}
pub async fn delete_history(
    ctx: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let history_id = Uuid::parse_str(&id)?;

    let repo = HistoryRepository::new(&ctx.tenant);
    repo.delete(history_id).await?;

    Ok(Json(DeleteResponse::ok()))
}

/// POST /api/v1/histories/{id}/attendees
pub async fn add_attendee(
    ctx: RequestContext,
    Path(id): Path<String>,
    Json(request): Json<AttendeeRequest>,
) -> ApiResult<Json<HistoryResponse>> {
    let history_id = Uuid::parse_str(&id)?;

    let raw_user_id = request.user_id.as_deref().ok_or_else(|| ApiError::Validation {
        message: "user_id is required".to_string(),
        field: Some("user_id".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;
    let user_id = Uuid::parse_str(raw_user_id)?;
    let attendee = build_attendee(user_id, &request)?;

    let repo = HistoryRepository::new(&ctx.tenant);
    let history = repo.add_attendee(history_id, &attendee).await?;

    Ok(Json(HistoryResponse {
        history: history.into(),
    }))
}

/// PUT /api/v1/histories/{id}/attendees/{user_id}
///
/// Replaces the attendee's entry, or appends one when the user is not on
/// the archived list yet.
pub async fn update_attendee(
    ctx: RequestContext,
    Path((id, user_id)): Path<(String, String)>,
    Json(request): Json<AttendeeRequest>,
) -> ApiResult<Json<HistoryResponse>> {
    let history_id = Uuid::parse_str(&id)?;
    let user_id = Uuid::parse_str(&user_id)?;
    let attendee = build_attendee(user_id, &request)?;

    let repo = HistoryRepository::new(&ctx.tenant);
    let history = repo
        .upsert_attendee(history_id, &attendee, request.exam_score)
        .await?;

    Ok(Json(HistoryResponse {
        history: history.into(),
    }))
}

fn build_attendee(user_id: Uuid, request: &AttendeeRequest) -> ApiResult<HistoryAttendee> {
    let approver_id = request
        .approver_id
        .as_deref()
        .map(Uuid::parse_str)
        .transpose()?;

    Ok(HistoryAttendee {
        user_id,
        first_round: request.first_round.unwrap_or(false),
        second_round: request.second_round.unwrap_or(false),
        ticket: Ticket {
            paying: request.paying.unwrap_or(true),
            reason: request.reason.clone(),
            approver_id,
        },
    })
}
