use crate::modules::events::core::comment::Comment;
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::pagination::paginate;
use crate::shared::core::primitives::Id;

pub const DEFAULT_LIMIT: u64 = 10;

pub async fn list_comments(
    repository: &dyn EventRepository,
    event_id: Id,
    offset: u64,
    limit: u64,
) -> Result<Vec<Comment>, ApplicationError> {
    let comments = repository.list_comments(event_id).await?;
    Ok(paginate(comments, offset, limit))
}
