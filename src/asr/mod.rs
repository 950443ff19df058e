pub mod interface;
pub mod audio;
pub mod client;
pub mod transcriber;
pub mod factory;

pub use interface::SpeechRecognizer;
pub use audio::{AudioClip, AudioFormat};
pub use client::ASRClient;
pub use transcriber::SpeechTranscriber;
pub use factory::ASRFactory;
