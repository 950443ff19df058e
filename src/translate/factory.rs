use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::config::TranslateConfig;
use crate::service_client::ServiceClient;
use super::client::TranslateClient;
use super::text_translator::TextTranslator;

/// Builds the one shared translator instance
pub struct TranslateFactory;

impl TranslateFactory {
    pub fn create_translator(config: &TranslateConfig) -> Result<TextTranslator> {
        info!("Initializing translator: {}", config.base_url);

        let service = ServiceClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
        let client = TranslateClient::new(service, config.api_key.clone());
        Ok(TextTranslator::new(Arc::new(client)))
    }
}
