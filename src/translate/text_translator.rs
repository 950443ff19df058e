use std::sync::Arc;

use tracing::info;

use crate::error::ServiceError;
use super::interface::{TranslationRequest, TranslationResult, Translator};

/// Validates requests and forwards them to the shared `Translator`
#[derive(Clone)]
pub struct TextTranslator {
    translator: Arc<dyn Translator>,
}

impl TextTranslator {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    pub async fn translate_text(&self, request: &TranslationRequest) -> Result<TranslationResult, ServiceError> {
        if request.text.trim().is_empty() {
            return Err(ServiceError::TranslationError("text is empty".to_string()));
        }
        if request.target_language.trim().is_empty() {
            return Err(ServiceError::TranslationError("target language is empty".to_string()));
        }

        info!("Translating {} chars into {}", request.text.len(), request.target_language);
        self.translator.translate(&request.text, &request.target_language).await
    }
}
