use crate::modules::events::core::attendee::NewAttendee;
use crate::modules::events::core::comment::NewComment;
use crate::modules::events::core::event::{Event, NewEvent};

pub fn sample_event() -> Event {
    Event {
        id: 42,
        nombre: "Conferencia de IA 2025".into(),
        fecha: "2025-06-15T09:00:00Z".into(),
        ubicacion: Some("Buenos Aires".into()),
        organizador: Some("TechCorp".into()),
    }
}

pub fn new_event() -> NewEvent {
    NewEvent {
        nombre: "Meetup de Rust".into(),
        fecha: "2025-01-01".into(),
        ubicacion: None,
        organizador: None,
    }
}

pub fn new_attendee() -> NewAttendee {
    NewAttendee {
        nombre: "Carla Ruiz".into(),
        email: "carla@example.com".into(),
    }
}

pub fn new_comment() -> NewComment {
    NewComment {
        usuario: "Carla".into(),
        texto: "Gran charla".into(),
        puntuacion: 5,
    }
}
