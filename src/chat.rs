use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::ServiceError;
use crate::generation::{GenerationParams, TextGenerator};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

impl ChatRequest {
    /// Extracts the request from a raw JSON body. Extra fields are ignored;
    /// a missing, non-string or blank `message` is a `MissingField` error.
    pub fn from_value(payload: &Value) -> Result<Self, ServiceError> {
        let message = payload
            .get("message")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ServiceError::MissingField("message".to_string()))?;

        if message.trim().is_empty() {
            return Err(ServiceError::MissingField("message".to_string()));
        }

        Ok(Self {
            message: message.to_string(),
        })
    }
}

/// Forwards user messages to the text generator and keeps the first candidate
#[derive(Clone)]
pub struct ChatService {
    generator: Arc<dyn TextGenerator>,
    params: GenerationParams,
}

impl ChatService {
    pub fn new(generator: Arc<dyn TextGenerator>, params: GenerationParams) -> Self {
        Self { generator, params }
    }

    pub async fn reply(&self, request: &ChatRequest) -> Result<ChatResponse, ServiceError> {
        info!(
            "Generating reply: model={}, message_len={}",
            self.generator.model_name(),
            request.message.len()
        );

        let candidates = self.generator.generate(&request.message, &self.params).await?;
        let reply = candidates
            .into_iter()
            .next()
            .map(|c| c.generated_text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                ServiceError::ServiceUnavailable("generation service returned no text".to_string())
            })?;

        Ok(ChatResponse { reply })
    }
}
