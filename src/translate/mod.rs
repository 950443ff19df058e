pub mod interface;
pub mod client;
pub mod text_translator;
pub mod factory;

pub use interface::{TranslationRequest, TranslationResult, Translator};
pub use client::TranslateClient;
pub use text_translator::TextTranslator;
pub use factory::TranslateFactory;
