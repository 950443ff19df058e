use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::chat::{ChatRequest, ChatResponse};
use crate::error::ServiceError;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/health", get(health_check))
}

/// Full application: routes, permissive CORS and request tracing
pub fn create_app(state: AppState) -> Router {
    create_routes()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ChatResponse>, ServiceError> {
    let Json(payload) = payload
        .map_err(|e| ServiceError::MissingField(format!("message ({})", e.body_text())))?;
    let request = ChatRequest::from_value(&payload)?;

    let response = state.chat.reply(&request).await?;
    Ok(Json(response))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let generation_healthy = match &state.generation_probe {
        Some(probe) => probe.health_check().await.unwrap_or(false),
        None => false,
    };
    Json(json!({
        "status": "ok",
        "generation_service": generation_healthy
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::tests::MockGenerator;
    use crate::chat::ChatService;
    use crate::generation::GenerationParams;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(generator: MockGenerator) -> Router {
        let chat = ChatService::new(Arc::new(generator), GenerationParams::default());
        create_app(AppState::with_chat(chat))
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn hello_returns_reply() {
        let app = app_with(MockGenerator::replying(&["Hello, I am the complaint assistant."]));

        let response = app.oneshot(post_chat(r#"{"message": "Hello"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let reply = body["reply"].as_str().unwrap();
        assert!(!reply.is_empty());
        assert_eq!(reply, "Hello, I am the complaint assistant.");
    }

    #[tokio::test]
    async fn extra_lang_field_is_ignored() {
        let app = app_with(MockGenerator::replying(&["ok"]));

        let response = app
            .oneshot(post_chat(r#"{"message": "Hello", "lang": "hi"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_message_is_bad_request() {
        let app = app_with(MockGenerator::replying(&["unused"]));

        let response = app.oneshot(post_chat(r#"{"lang": "en"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "MissingField");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let app = app_with(MockGenerator::replying(&["unused"]));

        let response = app.oneshot(post_chat("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "MissingField");
    }

    #[tokio::test]
    async fn generator_failure_is_internal_error() {
        let app = app_with(MockGenerator::failing());

        let response = app.oneshot(post_chat(r#"{"message": "Hello"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["error"], "ServiceUnavailable");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = app_with(MockGenerator::replying(&["ok"]));

        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"message": "Hello"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn health_without_probe_reports_service_down() {
        let app = app_with(MockGenerator::replying(&["ok"]));

        let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["generation_service"], false);
    }
}
