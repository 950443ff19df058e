use std::sync::Arc;
use std::time::Duration;

use crate::chat::ChatService;
use crate::config::Config;
use crate::generation::GeneratorFactory;
use crate::service_client::ServiceClient;

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
    /// Probe for the generation service, used by the health route
    pub generation_probe: Option<ServiceClient>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let generation = &config.generation_config;
        let generator = GeneratorFactory::create_generator(generation)?;
        let chat = ChatService::new(generator, GeneratorFactory::params(generation));
        let probe = ServiceClient::new(&generation.base_url, Duration::from_secs(generation.timeout_secs))?
            .with_bearer_token(generation.api_token.clone());

        Ok(Self {
            chat: Arc::new(chat),
            generation_probe: Some(probe),
        })
    }

    /// State around an already-built chat service, without a health probe
    pub fn with_chat(chat: ChatService) -> Self {
        Self {
            chat: Arc::new(chat),
            generation_probe: None,
        }
    }
}
