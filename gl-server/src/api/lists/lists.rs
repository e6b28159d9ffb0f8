//! Guest list REST API handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::request_context::RequestContext;
use crate::api::lists::create_guest_list_request::CreateGuestListRequest;
use crate::api::lists::guest_list_dto::GuestListDto;
use crate::api::lists::guest_list_list_response::GuestListListResponse;
use crate::api::lists::guest_list_response::GuestListResponse;
use crate::api::lists::update_guest_list_request::UpdateGuestListRequest;
use crate::api::{delete_response::DeleteResponse, parse_datetime};

use gl_core::{ErrorLocation, GuestList};
use gl_db::{EventRepository, GuestListPatch, GuestListRepository};

use std::panic::Location;

use axum::{Json, extract::Path};
use uuid::Uuid;

/// GET /api/v1/lists
pub async fn list_guest_lists(ctx: RequestContext) -> ApiResult<Json<GuestListListResponse>> {
    let repo = GuestListRepository::new(&ctx.tenant);
    let lists = repo.find_all().await?;

    Ok(Json(GuestListListResponse {
        lists: lists.into_iter().map(GuestListDto::from).collect(),
    }))
}

/// GET /api/v1/events/{id}/lists
pub async fn list_event_guest_lists(
    ctx: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<GuestListListResponse>> {
    let event_id = Uuid::parse_str(&id)?;

    let repo = GuestListRepository::new(&ctx.tenant);
    let lists = repo.find_by_event(event_id).await?;

    Ok(Json(GuestListListResponse {
        lists: lists.into_iter().map(GuestListDto::from).collect(),
    }))
}

/// GET /api/v1/lists/{id}
pub async fn get_guest_list(
    ctx: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<GuestListResponse>> {
    let list_id = Uuid::parse_str(&id)?;

    let repo = GuestListRepository::new(&ctx.tenant);
    let list = repo
        .find_by_id(list_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Guest list {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(GuestListResponse { list: list.into() }))
}

/// POST /api/v1/lists
///
/// When `event_id` is supplied, the event must exist; its title is copied
/// onto the list at creation time.
pub async fn create_guest_list(
    ctx: RequestContext,
    Json(request): Json<CreateGuestListRequest>,
) -> ApiResult<Json<GuestListResponse>> {
    if request.title.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "title cannot be empty".to_string(),
            field: Some("title".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let start_date = parse_datetime(&request.start_date, "start_date")?;
    let end_date = parse_datetime(&request.end_date, "end_date")?;

    let mut list = GuestList::new(request.title, start_date, end_date);
    list.owner_id = Some(ctx.user_id);
    list.is_exam = request.is_exam;

    if let Some(raw_event_id) = request.event_id.as_deref() {
        let event_id = Uuid::parse_str(raw_event_id)?;
        let events = EventRepository::new(&ctx.tenant);
        let event = events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ApiError::NotFound {
                message: format!("Event {} not found", raw_event_id),
                location: ErrorLocation::from(Location::caller()),
            })?;
        list.event_id = Some(event.id);
        list.event_name = Some(event.title);
    }

    let repo = GuestListRepository::new(&ctx.tenant);
    repo.create(&list).await?;

    Ok(Json(GuestListResponse { list: list.into() }))
}

/// PUT /api/v1/lists/{id}
pub async fn update_guest_list(
    ctx: RequestContext,
    Path(id): Path<String>,
    Json(request): Json<UpdateGuestListRequest>,
) -> ApiResult<Json<GuestListResponse>> {
    let list_id = Uuid::parse_str(&id)?;

    let start_date = request
        .start_date
        .as_deref()
        .map(|s| parse_datetime(s, "start_date"))
        .transpose()?;
    let end_date = request
        .end_date
        .as_deref()
        .map(|s| parse_datetime(s, "end_date"))
        .transpose()?;

    // Re-attaching to another event refreshes the denormalized name too.
    let (event_id, event_name) = match request.event_id.as_deref() {
        Some(raw_event_id) => {
            let event_id = Uuid::parse_str(raw_event_id)?;
            let events = EventRepository::new(&ctx.tenant);
            let event = events
                .find_by_id(event_id)
                .await?
                .ok_or_else(|| ApiError::NotFound {
                    message: format!("Event {} not found", raw_event_id),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            (Some(event.id), Some(event.title))
        }
        None => (None, None),
    };

    let patch = GuestListPatch {
        title: request.title,
        owner_id: None,
        event_id,
        event_name,
        is_exam: request.is_exam,
        start_date,
        end_date,
    };

    let repo = GuestListRepository::new(&ctx.tenant);
    let list = repo.update(list_id, &patch).await?;

    Ok(Json(GuestListResponse { list: list.into() }))
}

/// DELETE /api/v1/lists/{id}
pub async fn delete_guest_list(
    ctx: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let list_id = Uuid::parse_str(&id)?;

    let repo = GuestListRepository::new(&ctx.tenant);
    repo.delete(list_id).await?;

    Ok(Json(DeleteResponse::ok()))
}
