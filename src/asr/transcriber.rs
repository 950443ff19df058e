use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::error::ServiceError;
use super::audio::AudioClip;
use super::interface::SpeechRecognizer;

/// Turns an audio file into text through a `SpeechRecognizer`
#[derive(Clone)]
pub struct SpeechTranscriber {
    recognizer: Arc<dyn SpeechRecognizer>,
    language: String,
    max_clip_bytes: u64,
}

impl SpeechTranscriber {
    pub fn new(recognizer: Arc<dyn SpeechRecognizer>, language: String, max_clip_bytes: u64) -> Self {
        Self {
            recognizer,
            language,
            max_clip_bytes,
        }
    }

    pub async fn transcribe(&self, path: impl AsRef<Path>) -> Result<String, ServiceError> {
        let path = path.as_ref();
        let clip = AudioClip::open(path, self.max_clip_bytes).await?;
        info!("Transcribing {} ({} bytes)", path.display(), clip.len());

        let text = self.recognizer.recognize(&clip, &self.language).await?;
        if text.trim().is_empty() {
            return Err(ServiceError::RecognitionError("no speech recognized".to_string()));
        }
        Ok(text)
    }
}
