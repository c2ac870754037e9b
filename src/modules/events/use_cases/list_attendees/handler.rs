use crate::modules::events::core::attendee::{Attendee, AttendeeOrder};
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::pagination::paginate;
use crate::shared::core::primitives::Id;

pub const DEFAULT_LIMIT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListAttendees {
    pub order: AttendeeOrder,
    pub limit: u64,
    pub offset: u64,
}

impl Default for ListAttendees {
    fn default() -> Self {
        Self {
            order: AttendeeOrder::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Orders the attendees first, then slices the requested page.
pub async fn list_attendees(
    repository: &dyn EventRepository,
    event_id: Id,
    query: ListAttendees,
) -> Result<Vec<Attendee>, ApplicationError> {
    let mut attendees = repository.list_attendees(event_id).await?;
    query.order.apply(&mut attendees);
    Ok(paginate(attendees, query.offset, query.limit))
}
