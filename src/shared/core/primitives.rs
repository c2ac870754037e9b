/// Identifier of an event, and of an attendee or comment within its event.
pub type Id = i64;

/// Next identifier after the highest one in use, starting at 1.
pub fn next_id(existing: impl IntoIterator<Item = Id>) -> Id {
    existing.into_iter().max().unwrap_or(0) + 1
}
