use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::Id;

pub async fn get_event(
    repository: &dyn EventRepository,
    event_id: Id,
) -> Result<Event, ApplicationError> {
    Ok(repository.get_event(event_id).await?)
}
