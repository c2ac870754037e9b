use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer};

use crate::modules::events::use_cases::update_event::handler::{UpdateEvent, update_event};
use crate::shared::core::primitives::Id;
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateEventBody {
    #[serde(default, deserialize_with = "supplied")]
    pub nombre: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub fecha: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub ubicacion: Option<Option<String>>,
    #[serde(default, deserialize_with = "supplied")]
    pub organizador: Option<Option<String>>,
}

// Only called for keys present in the body, so `null` becomes `Some(None)`.
fn supplied<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<UpdateEventBody> for UpdateEvent {
    fn from(body: UpdateEventBody) -> Self {
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
    event_id: Result<Path<Id>, PathRejection>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(event_id) = event_id?;
    let Json(body) = body?;
    let event = update_event(&*state.repository, event_id, body.into()).await?;
    Ok(Json(event))
}
