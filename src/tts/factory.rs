use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::config::SpeechConfig;
use crate::service_client::ServiceClient;
use super::client::TTSClient;
use super::interface::TTSInterface;
use super::player::{AudioPlayer, CommandPlayer};

/// Factory for creating TTS clients and players
pub struct TTSFactory;

impl TTSFactory {
    /// Create a TTS client based on configuration
    pub fn create_tts(config: &SpeechConfig) -> Result<Arc<dyn TTSInterface>> {
        info!("Initializing TTS client: {}", config.synthesis_url);

        let service = ServiceClient::new(&config.synthesis_url, Duration::from_secs(config.timeout_secs))?;
        Ok(Arc::new(TTSClient::new(service)))
    }

    /// Create the playback command, honoring the `player` override
    pub fn create_player(config: &SpeechConfig) -> Arc<dyn AudioPlayer> {
        let player = CommandPlayer::from_command_line(config.player.as_deref());
        info!("Using audio player: {}", player.program());
        Arc::new(player)
    }
}
