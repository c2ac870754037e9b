use crate::modules::events::core::ports::RepositoryError;
use crate::modules::events::core::validation::ValidationError;
use crate::shared::core::primitives::Id;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("event {0} not found")]
    EventNotFound(Id),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ApplicationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::EventNotFound(event_id) => Self::EventNotFound(event_id),
            other => Self::Repository(other),
        }
    }
}
