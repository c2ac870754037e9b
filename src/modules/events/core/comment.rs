use crate::shared::core::primitives::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Id,
    pub usuario: String,
    pub texto: String,
    pub puntuacion: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub usuario: String,
    pub texto: String,
    pub puntuacion: i64,
}

impl NewComment {
    pub fn into_comment(self, id: Id) -> Comment {
        Comment {
            id,
            usuario: self.usuario,
            texto: self.texto,
            puntuacion: self.puntuacion,
        }
    }
}
