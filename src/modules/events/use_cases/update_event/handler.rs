use crate::modules::events::core::event::{Event, EventPatch};
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::core::validation::{not_empty, not_null};
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::Id;

/// Partial update as received: the outer `Option` tells whether the field was
/// supplied, the inner one whether it was `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateEvent {
    pub nombre: Option<Option<String>>,
    pub fecha: Option<Option<String>>,
    pub ubicacion: Option<Option<String>>,
    pub organizador: Option<Option<String>>,
}

impl UpdateEvent {
    fn into_patch(self) -> Result<EventPatch, ApplicationError> {
        Ok(EventPatch {
            nombre: not_null("nombre", self.nombre)?,
            fecha: not_empty("fecha", not_null("fecha", self.fecha)?)?,
            ubicacion: self.ubicacion,
            organizador: self.organizador,
        })
    }
}

pub async fn update_event(
    repository: &dyn EventRepository,
    event_id: Id,
    command: UpdateEvent,
) -> Result<Event, ApplicationError> {
    let patch = command.into_patch()?;
    let event = repository.update_event(event_id, patch).await?;
    tracing::info!(event_id, "event updated");
    Ok(event)
}
