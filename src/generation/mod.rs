pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{GeneratedText, GenerationParams, TextGenerator};
pub use client::TextGenerationClient;
pub use factory::GeneratorFactory;
