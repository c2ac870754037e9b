use crate::shared::core::primitives::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Id,
    pub nombre: String,
    /// ISO-8601 timestamp, stored as given.
    pub fecha: String,
    pub ubicacion: Option<String>,
    pub organizador: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub nombre: String,
    pub fecha: String,
    pub ubicacion: Option<String>,
    pub organizador: Option<String>,
}

impl NewEvent {
    pub fn into_event(self, id: Id) -> Event {
        Event {
            id,
            nombre: self.nombre,
            fecha: self.fecha,
            ubicacion: self.ubicacion,
            organizador: self.organizador,
        }
    }
}

/// Fields to overwrite on an existing event. `None` leaves the field untouched;
/// for the optional fields `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub nombre: Option<String>,
    pub fecha: Option<String>,
    pub ubicacion: Option<Option<String>>,
    pub organizador: Option<Option<String>>,
}

impl Event {
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(nombre) = patch.nombre {
            self.nombre = nombre;
        }
        if let Some(fecha) = patch.fecha {
            self.fecha = fecha;
        }
        if let Some(ubicacion) = patch.ubicacion {
            self.ubicacion = ubicacion;
        }
        if let Some(organizador) = patch.organizador {
            self.organizador = organizador;
        }
    }
}
