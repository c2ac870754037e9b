use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::attendee::NewAttendee;
use crate::modules::events::use_cases::register_attendee::handler::register_attendee;
use crate::shared::core::primitives::Id;
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterAttendeeBody {
    pub nombre: String,
    pub email: String,
}

impl From<RegisterAttendeeBody> for NewAttendee {
    fn from(body: RegisterAttendeeBody) -> Self {
        Self {
            nombre: body.nombre,
            email: body.email,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    event_id: Result<Path<Id>, PathRejection>,
    body: Result<Json<RegisterAttendeeBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(event_id) = event_id?;
    let Json(body) = body?;
    let attendee = register_attendee(&*state.repository, event_id, body.into()).await?;
    Ok(Json(attendee))
}
