use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::modules::events::use_cases::delete_event::handler::delete_event;
use crate::shared::core::primitives::Id;
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    event_id: Result<Path<Id>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(event_id) = event_id?;
    delete_event(&*state.repository, event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
