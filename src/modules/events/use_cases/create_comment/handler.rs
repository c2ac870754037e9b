use crate::modules::events::core::comment::{Comment, NewComment};
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::Id;

pub async fn create_comment(
    repository: &dyn EventRepository,
    event_id: Id,
    comment: NewComment,
) -> Result<Comment, ApplicationError> {
    let comment = repository.insert_comment(event_id, comment).await?;
    tracing::info!(event_id, comment_id = comment.id, "comment created");
    Ok(comment)
}
