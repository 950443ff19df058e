use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the chat endpoint and the speech/translation helpers
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required request field was absent or empty
    #[error("missing field: {0}")]
    MissingField(String),

    /// The recognition service could not produce a transcript
    #[error("speech recognition failed: {0}")]
    RecognitionError(String),

    /// The text-to-speech service rejected the text or language
    #[error("speech synthesis failed: {0}")]
    SynthesisError(String),

    /// The translation service failed (quota, network, unsupported pair)
    #[error("translation failed: {0}")]
    TranslationError(String),

    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),

    /// Generic failure of an external call
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ServiceError {
    /// Stable name of the error kind, used in HTTP error payloads
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MissingField",
            Self::RecognitionError(_) => "RecognitionError",
            Self::SynthesisError(_) => "SynthesisError",
            Self::TranslationError(_) => "TranslationError",
            Self::IOError(_) => "IOError",
            Self::ServiceUnavailable(_) => "ServiceUnavailable",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::warn!("rejected request: {}", self);
        }

        let body = Json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_maps_to_bad_request() {
        let err = ServiceError::MissingField("message".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "MissingField");
    }

    #[test]
    fn other_kinds_map_to_internal_error() {
        let errors = [
            ServiceError::RecognitionError("x".into()),
            ServiceError::SynthesisError("x".into()),
            ServiceError::TranslationError("x".into()),
            ServiceError::ServiceUnavailable("x".into()),
            ServiceError::IOError(std::io::Error::other("disk")),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn response_body_carries_kind_and_message() {
        let response = ServiceError::ServiceUnavailable("model offline".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "ServiceUnavailable");
        assert_eq!(body["message"], "service unavailable: model offline");
    }
}
