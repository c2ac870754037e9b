// Ports define what the events core needs from storage, without implementing it.
//
// Every operation addressing an event fails with `EventNotFound` when the event
// is absent, so callers never see an attendee or comment without its event.
// Id allocation happens inside the store, atomically with the insertion.

use crate::modules::events::core::attendee::{Attendee, NewAttendee};
use crate::modules::events::core::comment::{Comment, NewComment};
use crate::modules::events::core::event::{Event, EventPatch, NewEvent};
use crate::shared::core::primitives::Id;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("event {0} not found")]
    EventNotFound(Id),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// All events in insertion order.
    async fn list_events(&self) -> Result<Vec<Event>, RepositoryError>;

    async fn get_event(&self, event_id: Id) -> Result<Event, RepositoryError>;

    async fn insert_event(&self, event: NewEvent) -> Result<Event, RepositoryError>;

    async fn update_event(&self, event_id: Id, patch: EventPatch) -> Result<Event, RepositoryError>;

    /// Removes the event together with its attendees and comments.
    async fn delete_event(&self, event_id: Id) -> Result<(), RepositoryError>;

    /// Attendees of the event in insertion order.
    async fn list_attendees(&self, event_id: Id) -> Result<Vec<Attendee>, RepositoryError>;

    async fn insert_attendee(
        &self,
        event_id: Id,
        attendee: NewAttendee,
    ) -> Result<Attendee, RepositoryError>;

    /// Comments of the event in insertion order.
    async fn list_comments(&self, event_id: Id) -> Result<Vec<Comment>, RepositoryError>;

    async fn insert_comment(
        &self,
        event_id: Id,
        comment: NewComment,
    ) -> Result<Comment, RepositoryError>;
}
