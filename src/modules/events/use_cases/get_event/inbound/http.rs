use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};

use crate::modules::events::use_cases::get_event::handler::get_event;
use crate::shared::core::primitives::Id;
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    event_id: Result<Path<Id>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(event_id) = event_id?;
    let event = get_event(&*state.repository, event_id).await?;
    Ok(Json(event))
}
