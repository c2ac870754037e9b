use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::Id;

/// Deletes the event along with its attendees and comments.
pub async fn delete_event(
    repository: &dyn EventRepository,
    event_id: Id,
) -> Result<(), ApplicationError> {
    repository.delete_event(event_id).await?;
    tracing::info!(event_id, "event deleted");
    Ok(())
}
