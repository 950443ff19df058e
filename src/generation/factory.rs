use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::config::GenerationConfig;
use crate::service_client::ServiceClient;
use super::client::TextGenerationClient;
use super::interface::{GenerationParams, TextGenerator};

/// Builds the text generator and its request limits from configuration
pub struct GeneratorFactory;

impl GeneratorFactory {
    pub fn create_generator(config: &GenerationConfig) -> Result<Arc<dyn TextGenerator>> {
        info!("Initializing text generator: model={}, base_url={}", config.model, config.base_url);

        let service = ServiceClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?
            .with_bearer_token(config.api_token.clone());

        Ok(Arc::new(TextGenerationClient::new(service, config.model.clone())))
    }

    pub fn params(config: &GenerationConfig) -> GenerationParams {
        GenerationParams {
            max_length: config.max_length,
            num_return_sequences: config.num_return_sequences.max(1),
        }
    }
}
