use crate::modules::events::core::attendee::{Attendee, NewAttendee};
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::Id;

pub async fn register_attendee(
    repository: &dyn EventRepository,
    event_id: Id,
    attendee: NewAttendee,
) -> Result<Attendee, ApplicationError> {
    let attendee = repository.insert_attendee(event_id, attendee).await?;
    tracing::info!(event_id, attendee_id = attendee.id, "attendee registered");
    Ok(attendee)
}
