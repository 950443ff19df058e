pub mod interface;
pub mod client;
pub mod factory;
pub mod player;
pub mod synthesizer;

pub use interface::{TTSInterface, TTSRequest};
pub use client::TTSClient;
pub use factory::TTSFactory;
pub use player::{AudioPlayer, CommandPlayer};
pub use synthesizer::{SpeakOptions, SpeechSynthesizer};
