use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::use_cases::create_event::handler::{CreateEvent, create_event};
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub nombre: String,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub ubicacion: Option<String>,
    #[serde(default)]
    pub organizador: Option<String>,
}

impl From<CreateEventBody> for CreateEvent {
    fn from(body: CreateEventBody) -> Self {
        Self {
            nombre: body.nombre,
            fecha: body.fecha,
            ubicacion: body.ubicacion,
            organizador: body.organizador,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateEventBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let event = create_event(&*state.repository, body.into()).await?;
    Ok((StatusCode::CREATED, Json(event)))
}
