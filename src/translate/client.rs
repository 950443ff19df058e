use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ServiceError;
use crate::service_client::ServiceClient;
use super::interface::{TranslationResult, Translator};

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
    #[serde(default)]
    detected_language: Option<DetectedLanguage>,
}

#[derive(Debug, Deserialize)]
struct DetectedLanguage {
    language: String,
}

/// LibreTranslate-style client (`POST {base_url}/translate`).
/// One instance is shared; the underlying `reqwest::Client` is internally synchronized.
#[derive(Debug, Clone)]
pub struct TranslateClient {
    service: ServiceClient,
    api_key: Option<String>,
}

impl TranslateClient {
    pub fn new(service: ServiceClient, api_key: Option<String>) -> Self {
        Self { service, api_key }
    }
}

#[async_trait]
impl Translator for TranslateClient {
    async fn translate(&self, text: &str, target_language: &str) -> Result<TranslationResult, ServiceError> {
        let body = TranslateBody {
            q: text,
            source: "auto",
            target: target_language,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        debug!("Sending translate request: text_len={}, target={}", text.len(), target_language);

        let response = self
            .service
            .post("translate")
            .json(&body)
            .send()
            .await
            .map_err(|e| ServiceError::TranslationError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("Translation failed with {}: {}", status, detail);
            let reason = if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                "quota exceeded".to_string()
            } else {
                format!("translation service returned {}", status)
            };
            return Err(ServiceError::TranslationError(reason));
        }

        let result: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::TranslationError(format!("invalid response: {}", e)))?;

        Ok(TranslationResult {
            text: result.translated_text,
            source_language: result.detected_language.map(|d| d.language),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, api_key: Option<&str>) -> TranslateClient {
        TranslateClient::new(
            ServiceClient::new(&server.uri(), Duration::from_secs(2)).unwrap(),
            api_key.map(str::to_string),
        )
    }

    #[tokio::test]
    async fn translates_with_detected_source() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_json(serde_json::json!({
                "q": "hello", "source": "auto", "target": "es", "format": "text", "api_key": "k"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "translatedText": "hola",
                "detectedLanguage": {"confidence": 90.0, "language": "en"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server, Some("k")).translate("hello", "es").await.unwrap();
        assert_eq!(result.text, "hola");
        assert_eq!(result.source_language.as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn quota_exhaustion_is_translation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = client_for(&server, None).translate("hello", "es").await.unwrap_err();
        match err {
            ServiceError::TranslationError(msg) => assert_eq!(msg, "quota exceeded"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unsupported_pair_is_translation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "xx is not supported"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, None).translate("hello", "xx").await.unwrap_err();
        assert!(matches!(err, ServiceError::TranslationError(_)));
    }
}
