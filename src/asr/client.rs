use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::ServiceError;
use crate::service_client::ServiceClient;
use super::audio::AudioClip;
use super::interface::SpeechRecognizer;

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    transcript: Option<String>,
}

/// Speech-recognition client posting raw clips to `{base_url}/recognize`
#[derive(Debug, Clone)]
pub struct ASRClient {
    service: ServiceClient,
}

impl ASRClient {
    pub fn new(service: ServiceClient) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SpeechRecognizer for ASRClient {
    async fn recognize(&self, clip: &AudioClip, language: &str) -> Result<String, ServiceError> {
        debug!("Sending ASR request: bytes={}, format={:?}, language={}", clip.len(), clip.format(), language);

        let response = self
            .service
            .post("recognize")
            .query(&[("language", language)])
            .header(reqwest::header::CONTENT_TYPE, clip.format().mime_type())
            .body(clip.data().to_vec())
            .send()
            .await
            .map_err(|e| ServiceError::RecognitionError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            error!("ASR service returned {}", status);
            return Err(ServiceError::RecognitionError(format!(
                "recognition service returned {}",
                status
            )));
        }

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::RecognitionError(format!("invalid response: {}", e)))?;

        match result.transcript {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(ServiceError::RecognitionError("speech was unintelligible".to_string())),
        }
    }
}
