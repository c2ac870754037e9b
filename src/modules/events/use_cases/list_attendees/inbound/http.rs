use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::attendee::AttendeeOrder;
use crate::modules::events::use_cases::list_attendees::handler::{
    DEFAULT_LIMIT, ListAttendees, list_attendees,
};
use crate::shared::core::primitives::Id;
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListAttendeesParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub order: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    event_id: Result<Path<Id>, PathRejection>,
    params: Result<Query<ListAttendeesParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(event_id) = event_id?;
    let Query(params) = params?;
    let query = ListAttendees {
        order: params
            .order
            .as_deref()
            .map(AttendeeOrder::parse)
            .unwrap_or_default(),
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        offset: params.offset.unwrap_or(0),
    };
    let attendees = list_attendees(&*state.repository, event_id, query).await?;
    Ok(Json(attendees))
}
