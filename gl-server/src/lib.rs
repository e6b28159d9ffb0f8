pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::login,
        login_request::LoginRequest,
        login_response::LoginResponse,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    events::{
        create_event_request::CreateEventRequest,
        event_dto::EventDto,
        event_list_response::EventListResponse,
        event_response::EventResponse,
        events::{create_event, delete_event, get_event, list_events, update_event},
        update_event_request::UpdateEventRequest,
    },
    extractors::request_context::RequestContext,
    histories::{
        attendee_request::AttendeeRequest,
        create_history_request::CreateHistoryRequest,
        histories::{
            add_attendee, create_history, delete_history, get_history, list_histories,
            update_attendee,
        },
        history_dto::{HistoryAttendeeDto, HistoryDto, TicketDto},
        history_list_response::HistoryListResponse,
        history_response::HistoryResponse,
    },
    lists::{
        create_guest_list_request::CreateGuestListRequest,
        guest_list_dto::GuestListDto,
        guest_list_list_response::GuestListListResponse,
        guest_list_response::GuestListResponse,
        lists::{
            create_guest_list, delete_guest_list, get_guest_list, list_event_guest_lists,
            list_guest_lists, update_guest_list,
        },
        update_guest_list_request::UpdateGuestListRequest,
    },
    lots::{
        add_buyer_request::AddBuyerRequest,
        create_lot_request::CreateLotRequest,
        lot_dto::LotDto,
        lot_list_response::LotListResponse,
        lot_response::LotResponse,
        lots::{
            add_buyer, create_lot, delete_lot, get_lot, list_event_lots, list_lots, remove_buyer,
            update_lot,
        },
        update_lot_request::UpdateLotRequest,
    },
    users::{
        add_history_request::AddHistoryRequest,
        add_penalty_request::AddPenaltyRequest,
        set_password_request::SetPasswordRequest,
        upsert_user_request::UpsertUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{add_history, add_penalty, get_user, list_users, set_password, upsert_user},
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
