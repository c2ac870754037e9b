use crate::modules::events::adapters::outbound::repository_in_memory::InMemoryEventRepository;
use crate::shell::state::AppState;
use crate::tests::fixtures::authorizers::AllowAll;
use std::sync::Arc;

/// Seeded store behind a gate that lets everything through.
pub fn make_test_state() -> AppState {
    AppState {
        repository: Arc::new(InMemoryEventRepository::seeded()),
        authorizer: Arc::new(AllowAll),
    }
}

pub fn make_offline_state() -> AppState {
    let mut repository = InMemoryEventRepository::seeded();
    repository.toggle_offline();
    AppState {
        repository: Arc::new(repository),
        authorizer: Arc::new(AllowAll),
    }
}
