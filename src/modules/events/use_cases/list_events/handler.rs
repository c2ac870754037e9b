use crate::modules::events::core::event::Event;
use crate::modules::events::core::ports::EventRepository;
use crate::modules::events::core::validation::bounded;
use crate::modules::events::use_cases::errors::ApplicationError;
use crate::shared::core::pagination::Page;

pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEvents {
    pub ubicacion: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl Default for ListEvents {
    fn default() -> Self {
        Self {
            ubicacion: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

pub async fn list_events(
    repository: &dyn EventRepository,
    query: ListEvents,
) -> Result<Page<Event>, ApplicationError> {
    let limit = bounded("limit", query.limit, 1..=MAX_LIMIT)?;
    // An empty location filters nothing.
    let ubicacion = query.ubicacion.filter(|u| !u.is_empty());

    let events: Vec<Event> = repository
        .list_events()
        .await?
        .into_iter()
        .filter(|event| match &ubicacion {
            Some(ubicacion) => event.ubicacion.as_ref() == Some(ubicacion),
            None => true,
        })
        .collect();

    Ok(Page::new(events, query.offset, limit))
}
