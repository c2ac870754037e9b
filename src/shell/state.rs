use crate::modules::events::adapters::outbound::repository_in_memory::InMemoryEventRepository;
use crate::modules::events::core::ports::EventRepository;
use crate::shared::infrastructure::auth::Authorizer;
use crate::shared::infrastructure::auth::bearer_token::BearerToken;
use crate::shared::infrastructure::auth::deny_all::DenyAll;
use crate::shell::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn EventRepository>,
    pub authorizer: Arc<dyn Authorizer>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let repository = if config.seed_sample_data {
            InMemoryEventRepository::seeded()
        } else {
            InMemoryEventRepository::new()
        };
        let authorizer: Arc<dyn Authorizer> = match &config.api_token {
            Some(token) => Arc::new(BearerToken::new(token.clone())),
            None => Arc::new(DenyAll),
        };
        Self {
            repository: Arc::new(repository),
            authorizer,
        }
    }
}
