//! Event REST API handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::events::create_event_request::CreateEventRequest;
use crate::api::events::event_dto::EventDto;
use crate::api::events::event_list_response::EventListResponse;
use crate::api::events::event_response::EventResponse;
use crate::api::events::update_event_request::UpdateEventRequest;
use crate::api::extractors::request_context::RequestContext;
use crate::api::{delete_response::DeleteResponse, parse_datetime};

use gl_core::{ErrorLocation, Event};
use gl_db::{EventPatch, EventRepository};

use std::panic::Location;

use axum::{Json, extract::Path};
use uuid::Uuid;

/// GET /api/v1/events
pub async fn list_events(ctx: RequestContext) -> ApiResult<Json<EventListResponse>> {
    let repo = EventRepository::new(&ctx.tenant);
    let events = repo.find_all().await?;

    Ok(Json(EventListResponse {
        events: events.into_iter().map(EventDto::from).collect(),
    }))
}

/// GET /api/v1/events/{id}
pub async fn get_event(
    ctx: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<EventResponse>> {
    let event_id = Uuid::parse_str(&id)?;

    let repo = EventRepository::new(&ctx.tenant);
    let event = repo
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Event {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(EventResponse {
        event: event.into(),
    }))
}

/// POST /api/v1/events
pub async fn create_event(
    ctx: RequestContext,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    if request.title.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "title cannot be empty".to_string(),
            field: Some("title".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let start_date = parse_datetime(&request.start_date, "start_date")?;
    let end_date = parse_datetime(&request.end_date, "end_date")?;

    let mut event = Event::new(request.title, start_date, end_date);
    event.owner_id = Some(ctx.user_id);
    if let Some(price) = request.base_price {
        event.base_price = price;
    }
    if let Some(price) = request.female_base_price {
        event.female_base_price = price;
    }
    if let Some(price) = request.male_base_price {
        event.male_base_price = price;
    }

    let repo = EventRepository::new(&ctx.tenant);
    repo.create(&event).await?;

    Ok(Json(EventResponse {
        event: event.into(),
    }))
}

/// PUT /api/v1/events/{id}
pub async fn update_event(
    ctx: RequestContext,
    Path(id): Path<String>,
    Json(request): Json<UpdateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let event_id = Uuid::parse_str(&id)?;

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

    let patch = EventPatch {
        title: request.title,
        owner_id: None,
        start_date,
        end_date,
        base_price: request.base_price,
        female_base_price: request.female_base_price,
        male_base_price: request.male_base_price,
    };

    let repo = EventRepository::new(&ctx.tenant);
    let event = repo.update(event_id, &patch).await?;

    Ok(Json(EventResponse {
        event: event.into(),
    }))
}

/// DELETE /api/v1/events/{id}
pub async fn delete_event(
    ctx: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let event_id = Uuid::parse_str(&id)?;

    let repo = EventRepository::new(&ctx.tenant);
    repo.delete(event_id).await?;

    Ok(Json(DeleteResponse::ok()))
}
