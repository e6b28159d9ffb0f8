use crate::api::auth::auth::login;
use crate::api::events::events::{
    create_event, delete_event, get_event, list_events, update_event,
};
use crate::api::histories::histories::{
    add_attendee, create_history, delete_history, get_history, list_histories, update_attendee,
};
use crate::api::lists::lists::{
    create_guest_list, delete_guest_list, get_guest_list, list_event_guest_lists, list_guest_lists,
    update_guest_list,
};
use crate::api::lots::lots::{
    add_buyer, create_lot, delete_lot, get_lot, list_event_lots, list_lots, remove_buyer,
    update_lot,
};
use crate::api::users::users::{
    add_history, add_penalty, get_user, list_users, set_password, upsert_user,
};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        // Session issuing
        .route("/api/v1/auth/login", post(login))
        // Users (keyed by CPF, upsert semantics)
        .route("/api/v1/users", get(list_users))
        .route("/api/v1/users/{cpf}", get(get_user).put(upsert_user))
        .route("/api/v1/users/{cpf}/penalties", post(add_penalty))
        .route("/api/v1/users/{cpf}/history", post(add_history))
        .route("/api/v1/users/{cpf}/password", put(set_password))
        // Events
        .route("/api/v1/events", get(list_events).post(create_event))
        .route(
            "/api/v1/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/api/v1/events/{id}/lists", get(list_event_guest_lists))
        .route("/api/v1/events/{id}/lots", get(list_event_lots))
        // Guest lists
        .route(
            "/api/v1/lists",
            get(list_guest_lists).post(create_guest_list),
        )
        .route(
            "/api/v1/lists/{id}",
            get(get_guest_list)
                .put(update_guest_list)
                .delete(delete_guest_list),
        )
        // Ticket lots
        .route("/api/v1/lots", get(list_lots).post(create_lot))
        .route(
            "/api/v1/lots/{id}",
            get(get_lot).put(update_lot).delete(delete_lot),
        )
        .route("/api/v1/lots/{id}/buyers", post(add_buyer))
        .route("/api/v1/lots/{id}/buyers/{user_id}", delete(remove_buyer))
        // Archived list histories
        .route("/api/v1/histories", get(list_histories).post(create_history))
        .route(
            "/api/v1/histories/{id}",
            get(get_history).delete(delete_history),
        )
        .route("/api/v1/histories/{id}/attendees", post(add_attendee))
        .route(
            "/api/v1/histories/{id}/attendees/{user_id}",
            put(update_attendee),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
