// In memory implementation of the EventRepository port.
//
// Purpose
// - Serve the API without a database, and back handler tests.
//
// Responsibilities
// - Keep each event together with the attendees and comments it owns.
// - Allocate ids under the same write guard as the insertion.

use crate::modules::events::core::attendee::{Attendee, NewAttendee};
use crate::modules::events::core::comment::{Comment, NewComment};
use crate::modules::events::core::event::{Event, EventPatch, NewEvent};
use crate::modules::events::core::ports::{EventRepository, RepositoryError};
use crate::shared::core::primitives::{Id, next_id};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct EventRecord {
    event: Event,
    attendees: Vec<Attendee>,
    comments: Vec<Comment>,
}

impl EventRecord {
    fn new(event: Event) -> Self {
        Self {
            event,
            attendees: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// Event ids only ever grow, so key order is insertion order.
#[derive(Default)]
pub struct InMemoryEventRepository {
    records: RwLock<BTreeMap<Id, EventRecord>>,
    is_offline: bool,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the sample event 42 with two attendees and two comments.
    pub fn seeded() -> Self {
        let record = EventRecord {
            event: Event {
                id: 42,
                nombre: "Conferencia de IA 2025".into(),
                fecha: "2025-06-15T09:00:00Z".into(),
                ubicacion: Some("Buenos Aires".into()),
                organizador: Some("TechCorp".into()),
            },
            attendees: vec![
                Attendee {
                    id: 1,
                    nombre: "Ana Gómez".into(),
                    email: "ana@example.com".into(),
                },
                Attendee {
                    id: 2,
                    nombre: "Luis Pérez".into(),
                    email: "luis@example.com".into(),
                },
            ],
            comments: vec![
                Comment {
                    id: 1,
                    usuario: "Ana".into(),
                    texto: "¡Excelente evento!".into(),
                    puntuacion: 5,
                },
                Comment {
                    id: 2,
                    usuario: "Luis".into(),
                    texto: "Muy buen contenido.".into(),
                    puntuacion: 4,
                },
            ],
        };
        Self {
            records: RwLock::new(BTreeMap::from([(record.event.id, record)])),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Event repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn list_events(&self) -> Result<Vec<Event>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        Ok(guard.values().map(|record| record.event.clone()).collect())
    }

    async fn get_event(&self, event_id: Id) -> Result<Event, RepositoryError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        guard
            .get(&event_id)
            .map(|record| record.event.clone())
            .ok_or(RepositoryError::EventNotFound(event_id))
    }

    async fn insert_event(&self, event: NewEvent) -> Result<Event, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let id = next_id(guard.keys().copied());
        let event = event.into_event(id);
        guard.insert(id, EventRecord::new(event.clone()));
        Ok(event)
    }

    async fn update_event(&self, event_id: Id, patch: EventPatch) -> Result<Event, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let record = guard
            .get_mut(&event_id)
            .ok_or(RepositoryError::EventNotFound(event_id))?;
        record.event.apply(patch);
        Ok(record.event.clone())
    }

    async fn delete_event(&self, event_id: Id) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        guard
            .remove(&event_id)
            .map(|_| ())
            .ok_or(RepositoryError::EventNotFound(event_id))
    }

    async fn list_attendees(&self, event_id: Id) -> Result<Vec<Attendee>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        guard
            .get(&event_id)
            .map(|record| record.attendees.clone())
            .ok_or(RepositoryError::EventNotFound(event_id))
    }

    async fn insert_attendee(
        &self,
        event_id: Id,
        attendee: NewAttendee,
    ) -> Result<Attendee, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let record = guard
            .get_mut(&event_id)
            .ok_or(RepositoryError::EventNotFound(event_id))?;
        let id = next_id(record.attendees.iter().map(|a| a.id));
        let attendee = attendee.into_attendee(id);
        record.attendees.push(attendee.clone());
        Ok(attendee)
    }

    async fn list_comments(&self, event_id: Id) -> Result<Vec<Comment>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        guard
            .get(&event_id)
            .map(|record| record.comments.clone())
            .ok_or(RepositoryError::EventNotFound(event_id))
    }

    async fn insert_comment(
        &self,
        event_id: Id,
        comment: NewComment,
    ) -> Result<Comment, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        let record = guard
            .get_mut(&event_id)
            .ok_or(RepositoryError::EventNotFound(event_id))?;
        let id = next_id(record.comments.iter().map(|c| c.id));
        let comment = comment.into_comment(id);
        record.comments.push(comment.clone());
        Ok(comment)
    }
}
