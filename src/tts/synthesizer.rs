use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{info, warn};

use crate::error::ServiceError;
use super::interface::TTSInterface;
use super::player::AudioPlayer;

/// Where and in which language to synthesize
#[derive(Debug, Clone)]
pub struct SpeakOptions {
    pub language: String,
    pub filename: PathBuf,
}

impl Default for SpeakOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            filename: PathBuf::from("output.mp3"),
        }
    }
}

/// Converts text to an audio file and optionally plays it
#[derive(Clone)]
pub struct SpeechSynthesizer {
    tts: Arc<dyn TTSInterface>,
    player: Option<Arc<dyn AudioPlayer>>,
}

impl SpeechSynthesizer {
    pub fn new(tts: Arc<dyn TTSInterface>) -> Self {
        Self { tts, player: None }
    }

    pub fn with_player(mut self, player: Arc<dyn AudioPlayer>) -> Self {
        self.player = Some(player);
        self
    }

    /// Synthesizes `text`, writes it to `options.filename` and returns that path.
    ///
    /// A playback failure is logged but does not fail the call.
    pub async fn speak(&self, text: &str, options: &SpeakOptions) -> Result<PathBuf, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::SynthesisError("text is empty".to_string()));
        }
        if !is_language_code(&options.language) {
            return Err(ServiceError::SynthesisError(format!(
                "invalid language code: {:?}",
                options.language
            )));
        }

        let audio = self.tts.synthesize(text, &options.language).await?;
        if audio.is_empty() {
            return Err(ServiceError::SynthesisError("service returned no audio".to_string()));
        }

        let path = options.filename.clone();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &audio).await?;
        info!("Saved synthesized speech to {} ({} bytes)", path.display(), audio.len());

        if let Some(player) = &self.player {
            self.play(player.as_ref(), &path).await;
        }

        Ok(path)
    }

    async fn play(&self, player: &dyn AudioPlayer, path: &Path) {
        if let Err(e) = player.play(path).await {
            warn!("Audio playback failed for {}: {}", path.display(), e);
        }
    }
}

static LANGUAGE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z]{2,4})?$").unwrap());

/// Accepts `en`, `fil`, `zh-CN`, `pt-br` style codes
fn is_language_code(code: &str) -> bool {
    LANGUAGE_CODE.is_match(code)
}
