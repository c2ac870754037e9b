use crate::shared::core::primitives::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: Id,
    pub nombre: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendee {
    pub nombre: String,
    pub email: String,
}

impl NewAttendee {
    pub fn into_attendee(self, id: Id) -> Attendee {
        Attendee {
            id,
            nombre: self.nombre,
            email: self.email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttendeeOrder {
    #[default]
    ByName,
    Insertion,
}

impl AttendeeOrder {
    /// Only `"nombre"` selects name ordering; anything else keeps insertion order.
    pub fn parse(value: &str) -> Self {
        match value {
            "nombre" => Self::ByName,
            _ => Self::Insertion,
        }
    }

    pub fn apply(self, attendees: &mut [Attendee]) {
        if self == Self::ByName {
            attendees.sort_by(|a, b| a.nombre.cmp(&b.nombre));
        }
    }
}
