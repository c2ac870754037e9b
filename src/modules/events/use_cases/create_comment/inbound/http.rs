use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::events::core::comment::NewComment;
use crate::modules::events::use_cases::create_comment::handler::create_comment;
use crate::shared::core::primitives::Id;
use crate::shared::infrastructure::http::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCommentBody {
    pub usuario: String,
    pub texto: String,
    pub puntuacion: i64,
}

impl From<CreateCommentBody> for NewComment {
    fn from(body: CreateCommentBody) -> Self {
        Self {
            usuario: body.usuario,
            texto: body.texto,
            puntuacion: body.puntuacion,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    event_id: Result<Path<Id>, PathRejection>,
    body: Result<Json<CreateCommentBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(event_id) = event_id?;
    let Json(body) = body?;
    let comment = create_comment(&*state.repository, event_id, body.into()).await?;
    Ok(Json(comment))
}
