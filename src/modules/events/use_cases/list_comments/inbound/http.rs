use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::list_comments::handler::{DEFAULT_LIMIT, list_comments};
use crate::shared::core::primitives::Id;
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListCommentsParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

pub async fn handle(
    State(state): State<AppState>,
    event_id: Result<Path<Id>, PathRejection>,
    params: Result<Query<ListCommentsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(event_id) = event_id?;
    let Query(params) = params?;
    let comments = list_comments(
        &*state.repository,
        event_id,
        params.offset.unwrap_or(0),
        params.limit.unwrap_or(DEFAULT_LIMIT),
    )
    .await?;
    Ok(Json(comments))
}
