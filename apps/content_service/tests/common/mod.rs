#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request},
    response::Response,
    Router,
};
use content_service::{
    app_config::CorsPolicy, app_module::AppState, app_router::build_application,
    content::template_store::TemplateStore,
};
use http_body_util::BodyExt;
use seo_llm::{GeminiConfig, GeminiService, LLMService};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-key";
pub const GENERATE_PATH: &str = "/models/gemini-2.5-pro:generateContent";

/// Full application wired to a Gemini double listening at `upstream_url`.
pub fn build_test_app(upstream_url: &str, cors: CorsPolicy) -> Router {
    let gemini = GeminiConfig::new(TEST_API_KEY).with_api_base(upstream_url);
    let language_model: Arc<dyn LLMService> = Arc::new(GeminiService::new(gemini));
    let state = AppState::new(TemplateStore::builtin(), language_model);

    build_application(state, &cors)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
