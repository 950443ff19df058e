use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Body of a synthesis request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTSRequest {
    pub text: String,
    pub lang: String,
}

/// Text-to-speech service interface
#[async_trait]
pub trait TTSInterface: Send + Sync {
    /// Synthesize `text` spoken in `language` and return MP3 bytes
    ///
    /// # Arguments
    /// * `text` - The text to synthesize
    /// * `language` - ISO language code, e.g. "en" or "zh-CN"
    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>, ServiceError>;
}
