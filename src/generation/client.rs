use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error};

use crate::error::ServiceError;
use crate::service_client::ServiceClient;
use super::interface::{GeneratedText, GenerationParams, TextGenerator};

/// Client for a Hugging Face style inference endpoint
/// (`POST {base_url}/models/{model}`).
#[derive(Debug, Clone)]
pub struct TextGenerationClient {
    service: ServiceClient,
    model: String,
}

impl TextGenerationClient {
    pub fn new(service: ServiceClient, model: String) -> Self {
        Self { service, model }
    }
}

#[async_trait]
impl TextGenerator for TextGenerationClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<GeneratedText>, ServiceError> {
        let body = json!({
            "inputs": prompt,
            "parameters": {
                "max_length": params.max_length,
                "num_return_sequences": params.num_return_sequences,
            },
        });

        debug!("Sending generation request: model={}, prompt_len={}", self.model, prompt.len());

        let response = self
            .service
            .post(&format!("models/{}", self.model))
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("Generation service returned {}: {}", status, detail);
            return Err(ServiceError::ServiceUnavailable(format!(
                "generation service returned {}",
                status
            )));
        }

        response
            .json::<Vec<GeneratedText>>()
            .await
            .map_err(|e| ServiceError::ServiceUnavailable(format!("invalid generation response: {}", e)))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TextGenerationClient {
        let service = ServiceClient::new(&server.uri(), Duration::from_secs(2)).unwrap();
        TextGenerationClient::new(service, "distilgpt2".to_string())
    }

    #[tokio::test]
    async fn sends_prompt_with_generation_limits() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/distilgpt2"))
            .and(body_json(serde_json::json!({
                "inputs": "Hello",
                "parameters": {"max_length": 60, "num_return_sequences": 1}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"generated_text": "Hello there, how are you?"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let candidates = client_for(&server)
            .generate("Hello", &GenerationParams::default())
            .await
            .unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].generated_text, "Hello there, how are you?");
    }

    #[tokio::test]
    async fn non_success_status_is_service_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("Hello", &GenerationParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_service_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"oops": 1})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("Hello", &GenerationParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ServiceUnavailable(_)));
    }
}
