use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::list_events::handler::{DEFAULT_LIMIT, ListEvents, list_events};
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListEventsParams {
    pub ubicacion: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListEventsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let query = ListEvents {
        ubicacion: params.ubicacion,
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        offset: params.offset.unwrap_or(0),
    };
    let page = list_events(&*state.repository, query).await?;
    Ok(Json(page))
}
