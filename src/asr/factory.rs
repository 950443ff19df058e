use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::config::SpeechConfig;
use crate::service_client::ServiceClient;
use super::client::ASRClient;
use super::transcriber::SpeechTranscriber;

/// Factory for the speech transcriber
pub struct ASRFactory;

impl ASRFactory {
    pub fn create_transcriber(config: &SpeechConfig) -> Result<SpeechTranscriber> {
        info!("Initializing ASR client: {}", config.recognition_url);

        let service = ServiceClient::new(&config.recognition_url, Duration::from_secs(config.timeout_secs))?;
        Ok(SpeechTranscriber::new(
            Arc::new(ASRClient::new(service)),
            config.recognition_language.clone(),
            config.max_clip_bytes,
        ))
    }
}
