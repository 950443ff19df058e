use async_trait::async_trait;

use crate::error::ServiceError;
use super::audio::AudioClip;

/// Speech-recognition service: converts a whole audio clip to text
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Returns the transcript, or `RecognitionError` when the service
    /// produced none.
    ///
    /// # Arguments
    /// * `clip` - The complete clip to recognize
    /// * `language` - BCP 47 language hint, e.g. "en-US"
    async fn recognize(&self, clip: &AudioClip, language: &str) -> Result<String, ServiceError>;
}
