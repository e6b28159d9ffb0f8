//! Lot REST API handlers

use crate::api::delete_response::DeleteResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::request_context::RequestContext;
use crate::api::lots::add_buyer_request::AddBuyerRequest;
use crate::api::lots::create_lot_request::CreateLotRequest;
use crate::api::lots::lot_dto::LotDto;
use crate::api::lots::lot_list_response::LotListResponse;
use crate::api::lots::lot_response::LotResponse;
use crate::api::lots::update_lot_request::UpdateLotRequest;

use gl_core::{ErrorLocation, Lot};
use gl_db::{EventRepository, LotPatch, LotRepository};

use std::panic::Location;

use axum::{Json, extract::Path};
use uuid::Uuid;

/// GET /api/v1/lots
pub async fn list_lots(ctx: RequestContext) -> ApiResult<Json<LotListResponse>> {
    let repo = LotRepository::new(&ctx.tenant);
    let lots = repo.find_all().await?;

    Ok(Json(LotListResponse {
        lots: lots.into_iter().map(LotDto::from).collect(),
    }))
}

/// GET /api/v1/events/{id}/lots
pub async fn list_event_lots(
    ctx: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<LotListResponse>> {
    let event_id = Uuid::parse_str(&id)?;

    let repo = LotRepository::new(&ctx.tenant);
    let lots = repo.find_by_event(event_id).await?;

    Ok(Json(LotListResponse {
        lots: lots.into_iter().map(LotDto::from).collect(),
    }))
}

/// GET /api/v1/lots/{id}
pub async fn get_lot(ctx: RequestContext, Path(id): Path<String>) -> ApiResult<Json<LotResponse>> {
    let lot_id = Uuid::parse_str(&id)?;

    let repo = LotRepository::new(&ctx.tenant);
    let lot = repo
        .find_by_id(lot_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Lot {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(LotResponse { lot: lot.into() }))
}

/// POST /api/v1/lots
///
/// When `event_id` is supplied, the event must exist.
pub async fn create_lot(
    ctx: RequestContext,
    Json(request): Json<CreateLotRequest>,
) -> ApiResult<Json<LotResponse>> {
    if request.title.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "title cannot be empty".to_string(),
            field: Some("title".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if let Some(quantity) = request.quantity {
        if quantity < 0 {
            return Err(ApiError::Validation {
                message: "quantity cannot be negative".to_string(),
                field: Some("quantity".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    let mut lot = Lot::new(
        request.title,
        request.quantity.unwrap_or(0),
        request.value.unwrap_or(0.0),
    );
    lot.male_lot = request.male_lot.unwrap_or(false);
    lot.female_lot = request.female_lot.unwrap_or(false);

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
        lot.event_id = Some(event.id);
    }

    let repo = LotRepository::new(&ctx.tenant);
    repo.create(&lot).await?;

    Ok(Json(LotResponse { lot: lot.into() }))
}

/// PUT /api/v1/lots/{id}
pub async fn update_lot(
    ctx: RequestContext,
    Path(id): Path<String>,
    Json(request): Json<UpdateLotRequest>,
) -> ApiResult<Json<LotResponse>> {
    let lot_id = Uuid::parse_str(&id)?;

    let event_id = match request.event_id.as_deref() {
        Some(raw_event_id) => {
            let event_id = Uuid::parse_str(raw_event_id)?;
            let events = EventRepository::new(&ctx.tenant);
            events
                .find_by_id(event_id)
                .await?
                .ok_or_else(|| ApiError::NotFound {
                    message: format!("Event {} not found", raw_event_id),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            Some(event_id)
        }
        None => None,
    };

    let patch = LotPatch {
        title: request.title,
        event_id,
        quantity: request.quantity,
        value: request.value,
        sold_out: request.sold_out,
        male_lot: request.male_lot,
        female_lot: request.female_lot,
    };

    let repo = LotRepository::new(&ctx.tenant);
    let lot = repo.update(lot_id, &patch).await?;

    Ok(Json(LotResponse { lot: lot.into() }))
}

/// DELETE /api/v1/lots/{id}
pub async fn delete_lot(
    ctx: RequestContext,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let lot_id = Uuid::parse_str(&id)?;

    let repo = LotRepository::new(&ctx.tenant);
    repo.delete(lot_id).await?;

    Ok(Json(DeleteResponse::ok()))
}

/// POST /api/v1/lots/{id}/buyers
pub async fn add_buyer(
    ctx: RequestContext,
    Path(id): Path<String>,
    Json(request): Json<AddBuyerRequest>,
) -> ApiResult<Json<LotResponse>> {
    let lot_id = Uuid::parse_str(&id)?;
    let user_id = Uuid::parse_str(&request.user_id)?;

    let repo = LotRepository::new(&ctx.tenant);
    let lot = repo.add_buyer(lot_id, user_id).await?;

    Ok(Json(LotResponse { lot: lot.into() }))
}

/// DELETE /api/v1/lots/{id}/buyers/{user_id}
pub async fn remove_buyer(
    ctx: RequestContext,
    Path((id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<LotResponse>> {
    let lot_id = Uuid::parse_str(&id)?;
    let user_id = Uuid::parse_str(&user_id)?;

    let repo = LotRepository::new(&ctx.tenant);
    let lot = repo.remove_buyer(lot_id, user_id).await?;

    Ok(Json(LotResponse { lot: lot.into() }))
}
