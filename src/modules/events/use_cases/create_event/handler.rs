use crate::modules::events::core::event::{Event, NewEvent};
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::core::validation::required;
use crate::modules::events::use_cases::errors::ApplicationError;

/// Event creation input as received. `fecha` is checked here rather than by the
/// extractor so a missing date gets its own message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub nombre: String,
    pub fecha: Option<String>,
    pub ubicacion: Option<String>,
    pub organizador: Option<String>,
}

pub async fn create_event(
    repository: &dyn EventRepository,
    command: CreateEvent,
) -> Result<Event, ApplicationError> {
    let event = NewEvent {
        nombre: command.nombre,
        fecha: required("fecha", command.fecha)?,
        ubicacion: command.ubicacion,
        organizador: command.organizador,
    };
    let event = repository.insert_event(event).await?;
    tracing::info!(event_id = event.id, "event created");
    Ok(event)
}
