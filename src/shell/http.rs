use axum::{Router, middleware, routing::get};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::modules::events::use_cases::create_comment::inbound::http as create_comment_http;
use crate::modules::events::use_cases::create_event::inbound::http as create_event_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_event_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_event_http;
use crate::modules::events::use_cases::list_attendees::inbound::http as list_attendees_http;
use crate::modules::events::use_cases::list_comments::inbound::http as list_comments_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_events_http;
use crate::modules::events::use_cases::register_attendee::inbound::http as register_attendee_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_event_http;
use crate::shared::infrastructure::auth::require_auth;
use crate::shared::infrastructure::http::request_id::MakeRequestUuidV7;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let v1 = Router::new()
        .route(
            "/eventos",
            get(list_events_http::handle).post(create_event_http::handle),
        )
        .route(
            "/eventos/{id}",
            get(get_event_http::handle)
                .patch(update_event_http::handle)
                .delete(delete_event_http::handle),
        )
        .route(
            "/eventos/{id}/asistentes",
            get(list_attendees_http::handle).post(register_attendee_http::handle),
        )
        .route(
            "/eventos/{id}/comentarios",
            get(list_comments_http::handle).post(create_comment_http::handle),
        )
        .route_layer(middleware::from_fn_with_state(
            state.authorizer.clone(),
            require_auth,
        ))
        .with_state(state);

    // Layers wrap outward: the request id is set before tracing sees the request.
    Router::new()
        .nest("/v1", v1)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
