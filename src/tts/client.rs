use async_trait::async_trait;
use tracing::{debug, error};

use crate::error::ServiceError;
use crate::service_client::ServiceClient;
use super::interface::{TTSInterface, TTSRequest};

/// TTS client that posts to `{base_url}/synthesize` and receives `audio/mpeg`
#[derive(Debug, Clone)]
pub struct TTSClient {
    service: ServiceClient,
}

impl TTSClient {
    pub fn new(service: ServiceClient) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TTSInterface for TTSClient {
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, ServiceError> {
        let request = TTSRequest {
            text: text.to_string(),
            lang: language.to_string(),
        };

        debug!("Sending TTS request: text_len={}, lang={}", text.len(), language);

        let response = self
            .service
            .post("synthesize")
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::SynthesisError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("TTS synthesis failed with {}: {}", status, detail);
            return Err(ServiceError::SynthesisError(format!(
                "synthesis service returned {}",
                status
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| ServiceError::SynthesisError(format!("failed to read audio: {}", e)))?;
        Ok(audio.to_vec())
    }
}
